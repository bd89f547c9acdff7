/*
 * Created on Thu Jul 31 2025
 *
 * This file is a part of Foldertree
 *
 * This program is free software: you can redistribute it and/or modify
 * it under the terms of the GNU Affero General Public License as published by
 * the Free Software Foundation, either version 3 of the License, or
 * (at your option) any later version.
 *
 * This program is distributed in the hope that it will be useful,
 * but WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
 * GNU Affero General Public License for more details.
 *
 * You should have received a copy of the GNU Affero General Public License
 * along with this program. If not, see <https://www.gnu.org/licenses/>.
 *
*/

//! Hand-rolled argument parsing. `ftsh` takes no network endpoint, no config
//! file -- just an optional `-q`/`--quiet` flag -- so this is a single pass
//! over `env::args()` rather than anything resembling a general parser.

pub struct Opts {
    pub quiet: bool,
}

pub enum ArgsError {
    Unknown(String),
}

impl std::fmt::Display for ArgsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unknown(a) => write!(f, "unknown argument `{a}`"),
        }
    }
}

pub fn parse() -> Result<Opts, ArgsError> {
    let mut quiet = false;
    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "-q" | "--quiet" => quiet = true,
            other => return Err(ArgsError::Unknown(other.to_owned())),
        }
    }
    Ok(Opts { quiet })
}
