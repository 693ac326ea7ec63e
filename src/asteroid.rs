use std::{
    collections::{hash_map::Entry, HashMap},
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

use anyhow::{Context, Result};

use crate::Error;

// x is the row index, y is the column index of the map.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    x: usize,
    y: usize,
}

impl Position {
    pub fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    pub fn x(&self) -> usize {
        self.x
    }

    pub fn y(&self) -> usize {
        self.y
    }
}

// Direction of one ray cast from a station, the offset to a target
// asteroid reduced by the gcd of its components. Asteroids share a sight
// line if and only if they lie on the same ray, the opposite ray reduces
// to the negated pair.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SightLine {
    x: isize,
    y: isize,
}

impl SightLine {
    fn reduce(offset_x: isize, offset_y: isize) -> Self {
        let offset_gcd = gcd(offset_x, offset_y);
        Self {
            x: offset_x / offset_gcd,
            y: offset_y / offset_gcd,
        }
    }
}

#[derive(Debug)]
pub struct AsteroidInfo {
    position: Position,
    sight_line: SightLine,
    distance: usize,
    angle: f64,
}

impl AsteroidInfo {
    fn between(station: &Position, asteroid: &Position) -> Self {
        let offset_x =
            isize::try_from(asteroid.x).unwrap() - isize::try_from(station.x).unwrap();
        let offset_y =
            isize::try_from(asteroid.y).unwrap() - isize::try_from(station.y).unwrap();

        Self {
            position: asteroid.clone(),
            sight_line: SightLine::reduce(offset_x, offset_y),
            distance: offset_x.unsigned_abs() + offset_y.unsigned_abs(),
            angle: angle(offset_x, offset_y),
        }
    }

    pub fn position(&self) -> &Position {
        &self.position
    }

    pub fn sight_line(&self) -> &SightLine {
        &self.sight_line
    }

    pub fn distance(&self) -> usize {
        self.distance
    }

    pub fn angle(&self) -> f64 {
        self.angle
    }
}

pub struct AsteroidMap {
    asteroids: Vec<Position>,
}

impl TryFrom<&[String]> for AsteroidMap {
    type Error = Error;

    fn try_from(value: &[String]) -> std::result::Result<Self, Self::Error> {
        let mut asteroids = Vec::new();
        let mut col_n = None;
        for (r_ind, row) in value.iter().enumerate() {
            let this_col_n = row.chars().count();
            if *col_n.get_or_insert(this_col_n) != this_col_n {
                return Err(Error::InconsistentRow(col_n.unwrap(), this_col_n));
            }

            for (c_ind, c) in row.chars().enumerate() {
                match c {
                    '#' => asteroids.push(Position::new(r_ind, c_ind)),
                    '.' => (),
                    _ => return Err(Error::InvalidChar(r_ind, c_ind, c)),
                }
            }
        }

        Ok(Self { asteroids })
    }
}

impl AsteroidMap {
    pub fn asteroid_count(&self) -> usize {
        self.asteroids.len()
    }

    // Asteroids detectable from given station, one per distinct sight
    // line(the nearest one blocks all farther ones on the same ray),
    // sorted by angle. The station itself is excluded.
    pub fn visible_from(&self, station: &Position) -> Vec<AsteroidInfo> {
        let mut closest_per_line: HashMap<SightLine, AsteroidInfo> = HashMap::new();
        for asteroid in self.asteroids.iter().filter(|a| *a != station) {
            let info = AsteroidInfo::between(station, asteroid);
            match closest_per_line.entry(info.sight_line.clone()) {
                Entry::Occupied(mut closest) => {
                    if info.distance < closest.get().distance {
                        closest.insert(info);
                    }
                }
                Entry::Vacant(entry) => {
                    entry.insert(info);
                }
            }
        }

        let mut visible = closest_per_line.into_values().collect::<Vec<_>>();
        visible.sort_by(|l, r| l.angle.total_cmp(&r.angle));
        visible
    }

    // Station which detects the most asteroids, paired with all of them.
    // Asteroids are stored in row-major order and the current best is
    // only replaced on a strictly greater count, so on equal counts the
    // station with the lowest (x, y) wins. None if the map has no
    // asteroid.
    pub fn best_station(&self) -> Option<(Position, Vec<AsteroidInfo>)> {
        let mut best: Option<(Position, Vec<AsteroidInfo>)> = None;
        for station in &self.asteroids {
            let visible = self.visible_from(station);
            match &best {
                Some((_, most_visible)) if visible.len() <= most_visible.len() => (),
                _ => best = Some((station.clone(), visible)),
            }
        }

        best
    }
}

pub fn read_map<P: AsRef<Path>>(path: P) -> Result<AsteroidMap> {
    let file = File::open(&path)
        .with_context(|| format!("Failed to open given file({}).", path.as_ref().display()))?;
    let reader = BufReader::new(file);
    let mut lines = Vec::new();
    for (ind, line) in reader.lines().enumerate() {
        lines.push(line.with_context(|| {
            format!(
                "Failed to read line {} of given file({}).",
                ind + 1,
                path.as_ref().display()
            )
        })?);
    }

    Ok(AsteroidMap::try_from(lines.as_slice())?)
}

// Degrees clockwise from "up"(toward smaller row index), in [0, 360).
fn angle(offset_x: isize, offset_y: isize) -> f64 {
    (offset_y as f64)
        .atan2((-offset_x) as f64)
        .to_degrees()
        .rem_euclid(360.0)
}

fn gcd(n0: isize, n1: isize) -> isize {
    let n0 = n0.abs();
    let n1 = n1.abs();
    let mut large = n0.max(n1);
    let mut small = n0.min(n1);

    while small != 0 {
        let rem = large % small;
        large = small;
        small = rem;
    }

    large
}
