//! Upsert and read-back operations

use super::{models::*, schema::StandingsDatabase};
use crate::TeamId;
use anyhow::{Context, Result};
use rusqlite::{params, OptionalExtension, Row};

const UPSERT_STANDING: &str = "INSERT OR REPLACE INTO standings
     (team_id, team_name, \"rank\", points, goals_diff, form, played, win, draw, lose)
     VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)";

const SELECT_STANDING: &str = "SELECT team_id, team_name, \"rank\", points, goals_diff,
            form, played, win, draw, lose
     FROM standings";

fn row_to_standing(row: &Row) -> rusqlite::Result<StandingRow> {
    Ok(StandingRow {
        team_id: TeamId::new(row.get(0)?),
        team_name: row.get(1)?,
        rank: row.get(2)?,
        points: row.get(3)?,
        goals_diff: row.get(4)?,
        form: row.get::<_, Option<String>>(5)?.unwrap_or_default(),
        played: row.get(6)?,
        win: row.get(7)?,
        draw: row.get(8)?,
        lose: row.get(9)?,
    })
}

impl StandingsDatabase {
    /// Insert or replace a single team's row
    pub fn upsert_standing(&mut self, standing: &StandingRow) -> Result<()> {
        self.upsert_standings(std::slice::from_ref(standing))?;
        Ok(())
    }

    /// Insert or replace every row in one transaction.
    ///
    /// The transaction commits once after the last row; if any write fails
    /// the remaining rows are skipped and nothing from this batch is kept.
    pub fn upsert_standings(&mut self, standings: &[StandingRow]) -> Result<usize> {
        let tx = self
            .conn
            .transaction()
            .context("Failed to begin transaction")?;

        {
            let mut stmt = tx
                .prepare(UPSERT_STANDING)
                .context("Failed to prepare standings upsert")?;

            for s in standings {
                stmt.execute(params![
                    s.team_id.as_i64(),
                    s.team_name,
                    s.rank,
                    s.points,
                    s.goals_diff,
                    s.form,
                    s.played,
                    s.win,
                    s.draw,
                    s.lose
                ])
                .with_context(|| format!("Failed to upsert team {} ({})", s.team_id, s.team_name))?;
            }
        }

        tx.commit().context("Failed to commit standings")?;
        Ok(standings.len())
    }

    /// All stored rows ordered by rank
    pub fn get_standings(&self) -> Result<Vec<StandingRow>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{SELECT_STANDING} ORDER BY \"rank\", team_id"))?;

        let rows = stmt
            .query_map([], row_to_standing)?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        Ok(rows)
    }

    /// Stored row for one team, if any
    pub fn get_standing(&self, team_id: TeamId) -> Result<Option<StandingRow>> {
        let row = self
            .conn
            .query_row(
                &format!("{SELECT_STANDING} WHERE team_id = ?1"),
                params![team_id.as_i64()],
                row_to_standing,
            )
            .optional()?;

        Ok(row)
    }

    /// Number of rows in the standings table
    pub fn count(&self) -> Result<usize> {
        let n: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM standings", [], |row| row.get(0))?;
        Ok(n as usize)
    }
}
