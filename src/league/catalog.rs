use std::collections::{HashMap, HashSet};
use std::path::PathBuf;
use std::sync::Arc;

use once_cell::sync::OnceCell;
use serde::Deserialize;

use crate::error::LeagueError;
use crate::models::team::Team;

/// Reference tables of clubs and national teams, keyed by catalog league.
/// Immutable once loaded.
#[derive(Debug, Default, Deserialize)]
#[serde(transparent)]
pub struct TeamCatalog {
    leagues: HashMap<String, Vec<Team>>,
}

impl TeamCatalog {
    pub fn from_json(raw: &str) -> Result<Self, LeagueError> {
        let catalog: TeamCatalog = serde_json::from_str(raw)
            .map_err(|e| LeagueError::Catalog(format!("Malformed catalog: {}", e)))?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// Team names must be unique within a league
    fn validate(&self) -> Result<(), LeagueError> {
        for (league, teams) in &self.leagues {
            let mut seen = HashSet::new();
            for team in teams {
                if !seen.insert(team.name.to_lowercase()) {
                    return Err(LeagueError::Catalog(format!(
                        "Duplicate team '{}' in league '{}'",
                        team.name, league
                    )));
                }
            }
        }
        Ok(())
    }

    pub fn league_keys(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = self.leagues.keys().map(String::as_str).collect();
        keys.sort_unstable();
        keys
    }

    pub fn teams(&self, league: &str) -> Option<&[Team]> {
        self.leagues.get(league).map(Vec::as_slice)
    }

    /// Exact name first, then a case-insensitive match
    pub fn find(&self, league: &str, name: &str) -> Option<&Team> {
        let teams = self.leagues.get(league)?;
        let wanted = name.trim();
        teams
            .iter()
            .find(|t| t.name == wanted)
            .or_else(|| teams.iter().find(|t| t.name.eq_ignore_ascii_case(wanted)))
    }
}

/// Shared handle that reads the catalog file the first time it is needed
#[derive(Debug)]
pub struct CatalogHandle {
    path: PathBuf,
    cell: OnceCell<Arc<TeamCatalog>>,
}

impl CatalogHandle {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            cell: OnceCell::new(),
        }
    }

    /// Handle around an already built catalog
    pub fn preloaded(catalog: TeamCatalog) -> Self {
        let cell = OnceCell::new();
        let _ = cell.set(Arc::new(catalog));
        Self {
            path: PathBuf::new(),
            cell,
        }
    }

    pub fn get(&self) -> Result<Arc<TeamCatalog>, LeagueError> {
        self.cell
            .get_or_try_init(|| {
                tracing::info!("Loading team catalog from {}", self.path.display());
                let raw = std::fs::read_to_string(&self.path).map_err(|e| {
                    LeagueError::Catalog(format!("Cannot read {}: {}", self.path.display(), e))
                })?;
                TeamCatalog::from_json(&raw).map(Arc::new)
            })
            .cloned()
    }
}
