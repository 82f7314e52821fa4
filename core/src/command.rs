use crate::types::ZoneCode;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

/// All player-issued commands.
/// Variants added over time, never removed or reordered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "cmd", rename_all = "snake_case")]
pub enum PlayerCommand {
    // ── Game lifecycle ────────────────────────────
    NewGame {
        #[serde(default)]
        seed: Option<u64>,
    },
    LoadGame,
    SaveGame,

    // ── Cosmetic ──────────────────────────────────
    Action { input: String },

    // ── Customization ─────────────────────────────
    AddPark,
    ImproveTransport,
    EnhanceEducation,

    // ── Views ─────────────────────────────────────
    ViewResources,
    ViewHappiness,
    ViewBudget,
    ViewCity,
    ViewRoutes,

    // ── Crisis ────────────────────────────────────
    TriggerCrisis,
    ResolveCrisis,

    // ── Ledgers ───────────────────────────────────
    CollectResources,
    AccrueIncome,
    AccrueExpense,
    AdjustHappiness {
        amount: i64,
        #[serde(default)]
        reason: String,
    },

    // ── Grid and transport ────────────────────────
    PlaceBuilding { x: i64, y: i64, zone: ZoneCode },
    ResetCity,
    AddRoute { name: String },
    RemoveRoute { name: String },
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("{0}")]
pub struct ParseCommandError(String);

impl FromStr for PlayerCommand {
    type Err = ParseCommandError;

    /// Parse the short verb form, e.g. `place 3 4 residential` or `park`.
    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let verb = words
            .next()
            .ok_or_else(|| ParseCommandError("empty command".into()))?
            .to_lowercase();
        let rest: Vec<&str> = words.collect();

        let command = match verb.as_str() {
            "new" | "new-game" => PlayerCommand::NewGame {
                seed: match rest.first() {
                    Some(s) => Some(parse_num(s, "seed")?),
                    None => None,
                },
            },
            "load" | "load-game" => PlayerCommand::LoadGame,
            "save" | "save-game" => PlayerCommand::SaveGame,
            "act" | "action" => PlayerCommand::Action { input: rest.join(" ") },
            "park" | "add-park" => PlayerCommand::AddPark,
            "transport" | "improve-transport" => PlayerCommand::ImproveTransport,
            "education" | "enhance-education" => PlayerCommand::EnhanceEducation,
            "resources" | "view-resources" => PlayerCommand::ViewResources,
            "happiness" | "view-happiness" => PlayerCommand::ViewHappiness,
            "budget" | "view-budget" => PlayerCommand::ViewBudget,
            "city" | "view-city" => PlayerCommand::ViewCity,
            "routes" | "view-routes" => PlayerCommand::ViewRoutes,
            "crisis" | "trigger-crisis" => PlayerCommand::TriggerCrisis,
            "resolve" | "resolve-crisis" => PlayerCommand::ResolveCrisis,
            "collect" | "collect-resources" => PlayerCommand::CollectResources,
            "income" | "accrue-income" => PlayerCommand::AccrueIncome,
            "expense" | "accrue-expense" => PlayerCommand::AccrueExpense,
            "reset" | "reset-city" => PlayerCommand::ResetCity,
            "mood" | "adjust-happiness" => {
                let amount = rest
                    .first()
                    .ok_or_else(|| ParseCommandError("usage: adjust-happiness <amount> [reason]".into()))?;
                PlayerCommand::AdjustHappiness {
                    amount: parse_num(amount, "amount")?,
                    reason: rest[1..].join(" "),
                }
            }
            "place" | "place-building" => match rest.as_slice() {
                [x, y, zone] => PlayerCommand::PlaceBuilding {
                    x: parse_num(x, "x")?,
                    y: parse_num(y, "y")?,
                    zone: zone.parse().map_err(ParseCommandError)?,
                },
                _ => return Err(ParseCommandError("usage: place-building <x> <y> <zone>".into())),
            },
            "add-route" => PlayerCommand::AddRoute { name: required_name(&rest, "add-route")? },
            "remove-route" => PlayerCommand::RemoveRoute { name: required_name(&rest, "remove-route")? },
            other => return Err(ParseCommandError(format!("unknown command '{other}'"))),
        };
        Ok(command)
    }
}

fn parse_num<T: FromStr>(s: &str, what: &str) -> Result<T, ParseCommandError> {
    s.parse()
        .map_err(|_| ParseCommandError(format!("{what} must be a number, got '{s}'")))
}

fn required_name(rest: &[&str], verb: &str) -> Result<String, ParseCommandError> {
    if rest.is_empty() {
        return Err(ParseCommandError(format!("usage: {verb} <name>")));
    }
    Ok(rest.join(" "))
}
