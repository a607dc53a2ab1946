// Archsim
// Copyright (C) 2026 Archsim contributors

// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.

// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU Affero General Public License for more details.

// You should have received a copy of the GNU Affero General Public License
// along with this program.  If not, see <http://www.gnu.org/licenses/>.

use crate::isa::Isa;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::debug;

/// Key under which the build system records the coherence protocol.
pub const PROTOCOL_KEY: &str = "PROTOCOL";

/// Immutable snapshot of the build-time flags a simulation binary was
/// compiled with. Populated once before any resolver query runs; queries
/// never mutate it.
///
/// A flag that was never set reads as disabled, so an environment produced
/// by an older build system that lacks a newer ISA flag still resolves.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildEnv {
    flags: BTreeMap<String, bool>,
    settings: BTreeMap<String, String>,
}

impl BuildEnv {
    /// The keys a complete build environment is expected to carry: one
    /// `USE_<ISA>_ISA` flag per supported ISA, plus `PROTOCOL`.
    pub const REQUIRED_KEYS: [&'static str; 8] = [
        "USE_SPARC_ISA",
        "USE_MIPS_ISA",
        "USE_NULL_ISA",
        "USE_ARM_ISA",
        "USE_X86_ISA",
        "USE_POWER_ISA",
        "USE_RISCV_ISA",
        PROTOCOL_KEY,
    ];

    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a boolean flag during construction.
    pub fn with_flag(mut self, key: impl Into<String>, value: bool) -> Self {
        self.flags.insert(key.into(), value);
        self
    }

    /// Sets a string-valued setting during construction.
    pub fn with_setting(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.settings.insert(key.into(), value.into());
        self
    }

    /// Snapshots the required keys from the process environment.
    ///
    /// Flag values are parsed with [`parse_flag_value`]; anything else,
    /// including an unset variable, reads as disabled.
    pub fn capture() -> Self {
        let mut env = Self::new();
        for isa in Isa::ALL {
            let key = isa.build_flag();
            if let Ok(value) = std::env::var(key) {
                env.flags.insert(key.to_string(), parse_flag_value(&value));
            }
        }
        if let Ok(value) = std::env::var(PROTOCOL_KEY) {
            env.settings.insert(PROTOCOL_KEY.to_string(), value);
        }
        debug!(
            flags = env.flags.len(),
            protocol = env.settings.contains_key(PROTOCOL_KEY),
            "captured build environment"
        );
        env
    }

    /// Reads a boolean flag. Absent keys read as `false`.
    pub fn flag(&self, key: &str) -> bool {
        self.flags.get(key).copied().unwrap_or(false)
    }

    /// Reads a string-valued setting, if present.
    pub fn setting(&self, key: &str) -> Option<&str> {
        self.settings.get(key).map(String::as_str)
    }
}

/// Parses a build-flag value the way the build system emits booleans:
/// `1`, `true`, `yes` and `on` (any case) enable a flag, everything else
/// leaves it disabled.
pub fn parse_flag_value(value: &str) -> bool {
    matches!(value.trim().to_lowercase().as_str(), "1" | "true" | "yes" | "on")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flag_defaults_to_false() {
        let env = BuildEnv::new();
        assert!(!env.flag("USE_X86_ISA"));
        assert!(!env.flag("NO_SUCH_FLAG"));
    }

    #[test]
    fn test_flag_set_and_read() {
        let env = BuildEnv::new().with_flag("USE_ARM_ISA", true).with_flag("USE_X86_ISA", false);
        assert!(env.flag("USE_ARM_ISA"));
        assert!(!env.flag("USE_X86_ISA"));
    }

    #[test]
    fn test_setting_absent() {
        let env = BuildEnv::new();
        assert_eq!(env.setting(PROTOCOL_KEY), None);
    }

    #[test]
    fn test_setting_present() {
        let env = BuildEnv::new().with_setting(PROTOCOL_KEY, "CHI");
        assert_eq!(env.setting(PROTOCOL_KEY), Some("CHI"));
    }

    #[test]
    fn test_required_keys_cover_all_isas() {
        for isa in Isa::ALL {
            assert!(BuildEnv::REQUIRED_KEYS.contains(&isa.build_flag()));
        }
        assert!(BuildEnv::REQUIRED_KEYS.contains(&PROTOCOL_KEY));
        assert_eq!(BuildEnv::REQUIRED_KEYS.len(), Isa::ALL.len() + 1);
    }

    #[test]
    fn test_parse_flag_value_truthy() {
        assert!(parse_flag_value("1"));
        assert!(parse_flag_value("true"));
        assert!(parse_flag_value("True"));
        assert!(parse_flag_value("YES"));
        assert!(parse_flag_value("on"));
        assert!(parse_flag_value(" 1 "));
    }

    #[test]
    fn test_parse_flag_value_falsy() {
        assert!(!parse_flag_value("0"));
        assert!(!parse_flag_value("false"));
        assert!(!parse_flag_value(""));
        assert!(!parse_flag_value("enabled"));
        assert!(!parse_flag_value("2"));
    }

    #[test]
    fn test_serde_round_trip() {
        let env = BuildEnv::new().with_flag("USE_RISCV_ISA", true).with_setting(PROTOCOL_KEY, "chi");
        let json = serde_json::to_string(&env).unwrap();
        let back: BuildEnv = serde_json::from_str(&json).unwrap();
        assert_eq!(back, env);
    }
}
