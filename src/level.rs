use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, bail, Context, Result};
use rand::rngs::SmallRng;
use rand::seq::IndexedRandom;

use crate::entities::Player;

const EMPTY_MARKER: char = '0';

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Cell {
    Empty,
    Wall,
    Spawn(Player),
}

impl Cell {
    fn from_char(c: char) -> Self {
        match c {
            '*' => Cell::Wall,
            '1' => Cell::Spawn(Player::One),
            '2' => Cell::Spawn(Player::Two),
            _ => Cell::Empty,
        }
    }
}

/// A rectangular character grid. Every row has the same width.
#[derive(Clone, Debug)]
pub struct Level {
    name: String,
    rows: Vec<Vec<char>>,
}

impl Level {
    pub fn parse(name: &str, text: &str) -> Result<Self> {
        let lines: Vec<&str> = text.lines().map(str::trim).collect();
        let width = lines
            .iter()
            .map(|line| line.chars().count())
            .max()
            .unwrap_or(0);
        if width == 0 {
            bail!("level {name} is empty");
        }

        let rows: Vec<Vec<char>> = lines
            .iter()
            .map(|line| {
                let mut row: Vec<char> = line.chars().collect();
                row.resize(width, EMPTY_MARKER);
                row
            })
            .collect();

        let level = Self {
            name: name.to_string(),
            rows,
        };
        for player in Player::ALL {
            if level.spawn(player).is_none() {
                bail!("level {name} has no spawn for player {}", player.index() + 1);
            }
        }
        Ok(level)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn width(&self) -> usize {
        self.rows.first().map_or(0, Vec::len)
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }

    pub fn cell(&self, x: usize, y: usize) -> Cell {
        self.rows
            .get(y)
            .and_then(|row| row.get(x))
            .map_or(Cell::Empty, |&c| Cell::from_char(c))
    }

    pub fn cells(&self) -> impl Iterator<Item = (usize, usize, Cell)> + '_ {
        self.rows.iter().enumerate().flat_map(|(y, row)| {
            row.iter()
                .enumerate()
                .map(move |(x, &c)| (x, y, Cell::from_char(c)))
        })
    }

    /// Grid coordinates of a player's spawn marker. If a level repeats a
    /// marker, the last one in reading order wins.
    pub fn spawn(&self, player: Player) -> Option<(usize, usize)> {
        self.cells()
            .filter(|&(_, _, cell)| cell == Cell::Spawn(player))
            .map(|(x, y, _)| (x, y))
            .last()
    }
}

pub trait LevelSource {
    fn pick(&mut self, rng: &mut SmallRng) -> Result<Level>;
}

impl LevelSource for Vec<Level> {
    fn pick(&mut self, rng: &mut SmallRng) -> Result<Level> {
        self.choose(rng)
            .cloned()
            .ok_or_else(|| anyhow!("no levels available"))
    }
}

/// Level files in a directory, listed again on every pick so files can be
/// added while the game runs.
pub struct LevelDirectory {
    dir: PathBuf,
}

impl LevelDirectory {
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }

    pub fn names(&self) -> Result<Vec<String>> {
        let entries = fs::read_dir(&self.dir)
            .with_context(|| format!("failed to list levels in {}", self.dir.display()))?;
        let mut names = Vec::new();
        for entry in entries {
            let entry = entry?;
            if entry.file_type()?.is_file() {
                names.push(entry.file_name().to_string_lossy().into_owned());
            }
        }
        names.sort();
        Ok(names)
    }

    pub fn load(&self, name: &str) -> Result<Level> {
        let path = self.dir.join(name);
        let text = fs::read_to_string(&path)
            .with_context(|| format!("failed to read level {}", path.display()))?;
        Level::parse(name, &text)
    }
}

impl LevelSource for LevelDirectory {
    fn pick(&mut self, rng: &mut SmallRng) -> Result<Level> {
        let names = self.names()?;
        let name = names
            .choose(rng)
            .ok_or_else(|| anyhow!("no level files in {}", self.dir.display()))?;
        self.load(name)
    }
}
