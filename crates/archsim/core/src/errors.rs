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

use thiserror::Error;

/// Errors raised while resolving the runtime configuration. Both variants
/// signal a misconfigured build; callers are not expected to recover.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RuntimeError {
    /// Exactly one ISA flag must be enabled in the build environment.
    #[error("expected one ISA enabled, found {found}")]
    InvalidIsaCount { found: usize },

    /// The `PROTOCOL` value does not name a registered coherence protocol.
    #[error("protocol '{0}' not recognized")]
    UnrecognizedProtocol(String),
}
