//
//  Copyright (C) 2022-2024  Chase Ruskin
//
//  This program is free software: you can redistribute it and/or modify
//  it under the terms of the GNU General Public License as published by
//  the Free Software Foundation, either version 3 of the License, or
//  (at your option) any later version.
//
//  This program is distributed in the hope that it will be useful,
//  but WITHOUT ANY WARRANTY; without even the implied warranty of
//  MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
//  GNU General Public License for more details.
//
//  You should have received a copy of the GNU General Public License
//  along with this program.  If not, see <http://www.gnu.org/licenses/>.
//

//! Names of the environment variables read by rtlcurate.

use std::env;
use std::path::PathBuf;

/// Path to the accelerator registry file.
pub const RTLCURATE_CONFIG: &str = "RTLCURATE_CONFIG";

/// Reads `key` from the environment as a path, ignoring unset and empty values.
pub fn var_path(key: &str) -> Option<PathBuf> {
    match env::var_os(key) {
        Some(v) if v.is_empty() == false => Some(PathBuf::from(v)),
        _ => None,
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn unset_var_is_none() {
        assert_eq!(var_path("RTLCURATE_TEST_SURELY_UNSET_VARIABLE"), None);
    }
}
