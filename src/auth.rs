// cordial — a daemon-backed terminal client for chat platforms
// Copyright (C) 2026  Cordial contributors
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as
// published by the Free Software Foundation, either version 3 of the
// License, or (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU Affero General Public License for more details.
//
// You should have received a copy of the GNU Affero General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

use crate::config::Config;
use crate::error::AppError;

/// Prefix every user session token carries.
const TOKEN_PREFIX: &str = "mfa.";

/// Whether a token is usable for a session: non-empty, no leading
/// whitespace, and carrying the expected prefix.
#[must_use]
pub fn validate_token(token: &str) -> bool {
    !token.is_empty()
        && !token.starts_with(char::is_whitespace)
        && token.starts_with(TOKEN_PREFIX)
}

/// The session token from the settings file, or [`AppError::TokenInvalid`]
/// when it is absent or unusable. The daemon refuses to start without one.
pub fn session_token(config: &Config) -> Result<String, AppError> {
    match config.token.as_deref() {
        Some(token) if validate_token(token) => Ok(token.to_owned()),
        _ => Err(AppError::TokenInvalid),
    }
}
