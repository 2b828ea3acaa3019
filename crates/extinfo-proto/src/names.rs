//! Human-readable names for the enum-valued fields servers report.
//!
//! All lookups are bounds checked and fall back to `"unknown"`.

pub const UNKNOWN: &str = "unknown";

/// Master modes, starting at code -1 ("auth").
const MASTER_MODE_NAMES: [&str; 6] = ["auth", "open", "veto", "locked", "private", "password"];

const GAME_MODE_NAMES: [&str; 23] = [
    "ffa",
    "coop edit",
    "teamplay",
    "instagib",
    "instagib team",
    "efficiency",
    "efficiency team",
    "tactics",
    "tactics team",
    "capture",
    "regen capture",
    "ctf",
    "insta ctf",
    "protect",
    "insta protect",
    "hold",
    "insta hold",
    "efficiency ctf",
    "efficiency protect",
    "efficiency hold",
    "collect",
    "insta collect",
    "efficiency collect",
];

const WEAPON_NAMES: [&str; 12] = [
    "chain saw",
    "shotgun",
    "chain gun",
    "rocket launcher",
    "rifle",
    "grenade launcher",
    "pistol",
    "fire ball",
    "ice ball",
    "slime ball",
    "bite",
    "barrel",
];

const PRIVILEGE_NAMES: [&str; 4] = ["none", "master", "auth", "admin"];

const STATE_NAMES: [&str; 6] = ["alive", "dead", "spawning", "lagged", "editing", "spectator"];

/// Server mods identify themselves with negative codes starting at -2.
const SERVER_MOD_NAMES: [&str; 8] = [
    "hopmod",
    "oomod",
    "spaghettimod",
    "suckerserv",
    "remod",
    "noobmod",
    "zeromod",
    "waiter",
];

fn lookup(table: &[&'static str], index: i32) -> &'static str {
    usize::try_from(index)
        .ok()
        .and_then(|i| table.get(i))
        .copied()
        .unwrap_or(UNKNOWN)
}

pub fn master_mode_name(code: i32) -> &'static str {
    lookup(&MASTER_MODE_NAMES, code.saturating_add(1))
}

pub fn game_mode_name(code: i32) -> &'static str {
    lookup(&GAME_MODE_NAMES, code)
}

pub fn weapon_name(code: i32) -> &'static str {
    lookup(&WEAPON_NAMES, code)
}

pub fn privilege_name(code: i32) -> &'static str {
    lookup(&PRIVILEGE_NAMES, code)
}

pub fn state_name(code: i32) -> &'static str {
    lookup(&STATE_NAMES, code)
}

/// Name of the server mod with the given id, or `"unknown (<id>)"`.
pub fn server_mod_name(code: i32) -> String {
    let index = code.checked_neg().and_then(|n| n.checked_sub(2));
    match index.map(|i| lookup(&SERVER_MOD_NAMES, i)) {
        Some(name) if name != UNKNOWN => name.to_string(),
        _ => format!("{UNKNOWN} ({code})"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn master_modes_start_at_minus_one() {
        assert_eq!(master_mode_name(-1), "auth");
        assert_eq!(master_mode_name(0), "open");
        assert_eq!(master_mode_name(4), "password");
        assert_eq!(master_mode_name(5), UNKNOWN);
        assert_eq!(master_mode_name(-2), UNKNOWN);
        assert_eq!(master_mode_name(i32::MAX), UNKNOWN);
    }

    #[test]
    fn game_modes() {
        assert_eq!(game_mode_name(0), "ffa");
        assert_eq!(game_mode_name(12), "insta ctf");
        assert_eq!(game_mode_name(22), "efficiency collect");
        assert_eq!(game_mode_name(23), UNKNOWN);
        assert_eq!(game_mode_name(-1), UNKNOWN);
    }

    #[test]
    fn client_fields() {
        assert_eq!(weapon_name(4), "rifle");
        assert_eq!(weapon_name(12), UNKNOWN);
        assert_eq!(privilege_name(3), "admin");
        assert_eq!(privilege_name(-1), UNKNOWN);
        assert_eq!(state_name(5), "spectator");
        assert_eq!(state_name(6), UNKNOWN);
    }

    #[test]
    fn server_mods() {
        assert_eq!(server_mod_name(-2), "hopmod");
        assert_eq!(server_mod_name(-4), "spaghettimod");
        assert_eq!(server_mod_name(-9), "waiter");
        assert_eq!(server_mod_name(-10), "unknown (-10)");
        assert_eq!(server_mod_name(-1), "unknown (-1)");
        assert_eq!(server_mod_name(3), "unknown (3)");
        assert_eq!(server_mod_name(i32::MIN), format!("unknown ({})", i32::MIN));
    }
}
