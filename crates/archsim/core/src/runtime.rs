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

//! Resolves which ISA and coherence protocol the current binary was built
//! to support, from a [`BuildEnv`] snapshot.

use crate::build_env::{BuildEnv, PROTOCOL_KEY};
use crate::coherence::CoherenceProtocol;
use crate::errors::RuntimeError;
use crate::isa::Isa;

/// Names of the ISAs whose build flag is enabled, in declaration order.
///
/// The order is fixed by [`Isa::ALL`], never by the order the environment
/// was populated in.
pub fn enabled_isa_names(env: &BuildEnv) -> Vec<&'static str> {
    Isa::ALL.iter().filter(|isa| env.flag(isa.build_flag())).map(|isa| isa.name()).collect()
}

/// Name of the single enabled ISA.
///
/// A correctly built binary enables exactly one ISA; anything else is a
/// build misconfiguration and reports [`RuntimeError::InvalidIsaCount`].
pub fn active_isa_name(env: &BuildEnv) -> Result<&'static str, RuntimeError> {
    let enabled = enabled_isa_names(env);
    match enabled.as_slice() {
        [name] => Ok(*name),
        _ => Err(RuntimeError::InvalidIsaCount { found: enabled.len() }),
    }
}

/// The ISAs whose build flag is enabled, in declaration order.
pub fn enabled_isas(env: &BuildEnv) -> Vec<Isa> {
    Isa::ALL.iter().filter(|isa| env.flag(isa.build_flag())).copied().collect()
}

/// The single enabled ISA. Inherits the count check of [`active_isa_name`].
pub fn active_isa(env: &BuildEnv) -> Result<Isa, RuntimeError> {
    let enabled = enabled_isas(env);
    match enabled.as_slice() {
        [isa] => Ok(*isa),
        _ => Err(RuntimeError::InvalidIsaCount { found: enabled.len() }),
    }
}

/// The coherence protocol selected by the `PROTOCOL` setting.
///
/// Lookup is case-insensitive. An unregistered or missing value reports
/// [`RuntimeError::UnrecognizedProtocol`] carrying the raw string.
pub fn active_coherence_protocol(env: &BuildEnv) -> Result<CoherenceProtocol, RuntimeError> {
    let raw = env.setting(PROTOCOL_KEY).unwrap_or("");
    CoherenceProtocol::from_name(raw).ok_or_else(|| RuntimeError::UnrecognizedProtocol(raw.to_string()))
}
