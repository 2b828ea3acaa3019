//! Team scores, only reported while a team mode is running.

use serde::{Deserialize, Serialize};

use crate::cursor::ResponseCursor;
use crate::error::ProtoError;
use crate::names;

/// Score of one team.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamScore {
    pub name: String,
    /// Flags in ctf modes, frags in deathmatch modes, points in capture,
    /// skulls in collect.
    pub score: i32,
    /// Ids of the bases the team holds (capture modes only).
    pub bases: Vec<i32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamScoresRaw {
    pub game_mode: i32,
    pub secs_left: i32,
    pub scores: Vec<TeamScore>,
}

impl TeamScoresRaw {
    /// Decode the payload following a successful team scores header. Teams
    /// run until the end of the datagram.
    pub fn decode(cursor: &mut ResponseCursor) -> Result<Self, ProtoError> {
        let game_mode = cursor.read_int()?;
        let secs_left = cursor.read_int()?;

        let mut scores = Vec::new();
        while cursor.has_remaining() {
            let name = cursor.read_string()?;
            let score = cursor.read_int()?;
            // -1 when the mode has no bases
            let num_bases = cursor.read_int()?.max(0);
            let mut bases = Vec::new();
            for _ in 0..num_bases {
                bases.push(cursor.read_int()?);
            }
            scores.push(TeamScore { name, score, bases });
        }

        Ok(Self {
            game_mode,
            secs_left,
            scores,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamScores {
    #[serde(flatten)]
    pub raw: TeamScoresRaw,
    pub game_mode_name: String,
}

impl From<TeamScoresRaw> for TeamScores {
    fn from(raw: TeamScoresRaw) -> Self {
        Self {
            game_mode_name: names::game_mode_name(raw.game_mode).to_string(),
            raw,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::{write_int, write_string};
    use bytes::BytesMut;

    fn team(buf: &mut BytesMut, name: &str, score: i32, bases: Option<&[i32]>) {
        write_string(buf, name);
        write_int(buf, score);
        match bases {
            Some(bases) => {
                write_int(buf, bases.len() as i32);
                for &b in bases {
                    write_int(buf, b);
                }
            }
            None => write_int(buf, -1),
        }
    }

    #[test]
    fn decode_ctf_scores() {
        let mut buf = BytesMut::new();
        write_int(&mut buf, 12);
        write_int(&mut buf, 431);
        team(&mut buf, "good", 3, None);
        team(&mut buf, "evil", 5, None);
        let scores = TeamScoresRaw::decode(&mut ResponseCursor::new(buf.freeze())).unwrap();
        assert_eq!(scores.game_mode, 12);
        assert_eq!(scores.secs_left, 431);
        assert_eq!(
            scores.scores,
            vec![
                TeamScore {
                    name: "good".into(),
                    score: 3,
                    bases: vec![]
                },
                TeamScore {
                    name: "evil".into(),
                    score: 5,
                    bases: vec![]
                },
            ]
        );
    }

    #[test]
    fn decode_capture_bases() {
        let mut buf = BytesMut::new();
        write_int(&mut buf, 9);
        write_int(&mut buf, 0);
        team(&mut buf, "good", 1200, Some(&[0, 3, 4]));
        let scores = TeamScoresRaw::decode(&mut ResponseCursor::new(buf.freeze())).unwrap();
        assert_eq!(scores.scores[0].score, 1200);
        assert_eq!(scores.scores[0].bases, vec![0, 3, 4]);
    }

    #[test]
    fn no_teams_yet() {
        let mut buf = BytesMut::new();
        write_int(&mut buf, 2);
        write_int(&mut buf, 600);
        let scores = TeamScoresRaw::decode(&mut ResponseCursor::new(buf.freeze())).unwrap();
        assert!(scores.scores.is_empty());
    }

    #[test]
    fn truncated_team() {
        let mut buf = BytesMut::new();
        write_int(&mut buf, 12);
        write_int(&mut buf, 60);
        write_string(&mut buf, "good");
        assert!(matches!(
            TeamScoresRaw::decode(&mut ResponseCursor::new(buf.freeze())),
            Err(ProtoError::TruncatedBuffer { .. })
        ));
    }

    #[test]
    fn display_translates_mode() {
        let raw = TeamScoresRaw {
            game_mode: 11,
            secs_left: 10,
            scores: vec![],
        };
        let scores = TeamScores::from(raw.clone());
        assert_eq!(scores.game_mode_name, "ctf");
        assert_eq!(scores.raw, raw);
    }
}
