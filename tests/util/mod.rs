// SPDX-FileCopyrightText: 2025 Jason Pena <jasonpena@awkless.com>
// SPDX-License-Identifier: MIT

use anyhow::Result;
use omoospace::{make_file, make_path, Omoospace};

/// Minimal omoospace: a profile and a Contents directory, with the root
/// itself acting as the subspaces area.
pub fn mini_omoospace() -> Result<Omoospace> {
    make_path("MiniProject", ["Contents/"])?;
    make_file("MiniProject", "Omoospace.yml", "brief: A mini omoospace.\n")?;
    Ok(Omoospace::discover("MiniProject")?)
}

/// Omoospace with a dedicated Subspaces directory plus some bystander
/// directories that must never count as subspaces.
pub fn empty_omoospace() -> Result<Omoospace> {
    make_path(
        "EmptyProject",
        ["Contents/", "Subspaces/", "References/", "Void/"],
    )?;
    make_file("EmptyProject", "Omoospace.yml", "brief: An empty omoospace.\n")?;
    Ok(Omoospace::discover("EmptyProject")?)
}
