// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use crate::client::JiraClient;
use crate::config::Settings;
use crate::display::{connection_banner, format_user};
use crate::error::Result;
use crate::time_phase;

pub fn run(settings: &Settings) -> Result<()> {
    let client = JiraClient::new(settings)?;
    println!("{}", connection_banner(settings));

    let user = time_phase!("jira::myself", client.current_user())?;
    println!("{}", format_user(&user));
    Ok(())
}
