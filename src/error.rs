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

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AppError {
    #[error("settings file is invalid")]
    ConfigInvalid,
    #[error("session token is missing or invalid")]
    TokenInvalid,
    #[error("daemon address is already in use")]
    AddressInUse,
}

impl AppError {
    pub const CONFIG_INVALID_EXIT_CODE: i32 = 20;
    pub const TOKEN_INVALID_EXIT_CODE: i32 = 21;
    pub const ADDRESS_IN_USE_EXIT_CODE: i32 = 22;

    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::ConfigInvalid => Self::CONFIG_INVALID_EXIT_CODE,
            Self::TokenInvalid => Self::TOKEN_INVALID_EXIT_CODE,
            Self::AddressInUse => Self::ADDRESS_IN_USE_EXIT_CODE,
        }
    }

    #[must_use]
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::ConfigInvalid => {
                "The settings file could not be parsed. Fix or delete it and retry."
            }
            Self::TokenInvalid => {
                "No usable session token. Put `token = \"mfa.<...>\"` in the settings file."
            }
            Self::AddressInUse => {
                "The daemon address is already taken. Is another daemon running?"
            }
        }
    }
}
