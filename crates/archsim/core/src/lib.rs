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

//! Runtime configuration resolver for simulation binaries: determines which
//! ISA and cache-coherence protocol the current binary was built to support
//! from its build-time flags.

pub mod build_env;
pub mod coherence;
pub mod errors;
pub mod isa;
pub mod runtime;

pub use build_env::{BuildEnv, PROTOCOL_KEY};
pub use coherence::CoherenceProtocol;
pub use errors::RuntimeError;
pub use isa::Isa;
