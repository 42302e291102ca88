use pitchboard_engine::coords::Vec2;
use serde::{Deserialize, Serialize};

use super::PersistError;
use crate::model::{Board, Stroke};

#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct PointRec {
    pub x: f32,
    pub y: f32,
}

impl From<Vec2> for PointRec {
    fn from(v: Vec2) -> Self {
        Self { x: v.x, y: v.y }
    }
}

impl From<PointRec> for Vec2 {
    fn from(p: PointRec) -> Self {
        Vec2::new(p.x, p.y)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrokeRec {
    pub points: Vec<PointRec>,
}

/// The persisted board, with the wire field names of the stored format
/// (`enemies`, `paths`, `PLAYER_R`, `BALL_R`). Selection and view transform
/// are deliberately not part of the record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoardRecord {
    pub players: Vec<PointRec>,
    pub enemies: Vec<PointRec>,
    pub ball: PointRec,
    pub paths: Vec<StrokeRec>,
    #[serde(rename = "PLAYER_R")]
    pub player_radius: f32,
    #[serde(rename = "BALL_R")]
    pub ball_radius: f32,
}

impl BoardRecord {
    pub fn from_board(board: &Board) -> Self {
        Self {
            players: board.players().iter().map(|m| m.pos.into()).collect(),
            enemies: board.opponents().iter().map(|m| m.pos.into()).collect(),
            ball: board.ball().into(),
            paths: board
                .strokes()
                .iter()
                .map(|s| StrokeRec {
                    points: s.points().iter().map(|&p| p.into()).collect(),
                })
                .collect(),
            player_radius: board.player_radius(),
            ball_radius: board.ball_radius(),
        }
    }

    /// Checks value constraints the JSON schema cannot express.
    pub fn validate(&self) -> Result<(), PersistError> {
        let finite = |p: &PointRec| p.x.is_finite() && p.y.is_finite();

        if !self.players.iter().all(finite) || !self.enemies.iter().all(finite) {
            return Err(PersistError::Invalid("non-finite marker position"));
        }
        if !finite(&self.ball) {
            return Err(PersistError::Invalid("non-finite ball position"));
        }
        if !self.paths.iter().all(|s| s.points.iter().all(finite)) {
            return Err(PersistError::Invalid("non-finite stroke vertex"));
        }
        if !(self.player_radius.is_finite() && self.player_radius > 0.0) {
            return Err(PersistError::Invalid("player radius out of range"));
        }
        if !(self.ball_radius.is_finite() && self.ball_radius > 0.0) {
            return Err(PersistError::Invalid("ball radius out of range"));
        }
        Ok(())
    }

    /// Validates and builds the board. The returned board has fresh marker
    /// ids and an empty selection.
    pub fn into_board(self) -> Result<Board, PersistError> {
        self.validate()?;

        Ok(Board::from_parts(
            self.players.into_iter().map(Into::into).collect(),
            self.enemies.into_iter().map(Into::into).collect(),
            self.ball.into(),
            self.paths
                .into_iter()
                .map(|s| Stroke::from_points(s.points.into_iter().map(Into::into).collect()))
                .collect(),
            self.player_radius,
            self.ball_radius,
        ))
    }
}
