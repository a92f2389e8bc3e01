// SPDX-FileCopyrightText: 2025 Jason Pena <jasonpena@awkless.com>
// SPDX-License-Identifier: MIT

//! Omoospace directory convention.
//!
//! An __omoospace__ is a project directory for creative production work
//! (3D, film, and friends) governed by a YAML profile file. Source files
//! live in a __Subspaces__ area, deliverables in a __Contents__ area, and
//! every file or directory under the subspaces area — a __subspace__ —
//! takes part in a shared naming hierarchy.
//!
//! The crate's core is the pathname resolution machinery: normalizing
//! messy DCC filenames into canonical tokens, deriving each subspace's
//! hierarchical pathname by clipping redundant naming against its
//! directory chain, and aggregating everything into the __objective tree__
//! that answers "what does this project contain, really?" regardless of
//! how files are physically nested.
//!
//! ```no_run
//! use omoospace::Omoospace;
//!
//! let omoospace = Omoospace::discover("path/inside/project")?;
//! let tree = omoospace.objective_tree()?;
//! println!("{}", tree.format());
//! # Ok::<(), omoospace::OmoospaceError>(())
//! ```

pub mod name;
pub mod objective;
pub mod omoospace;
pub mod path;
pub mod profile;
pub mod subspace;

pub use crate::{
    name::normalize_name,
    objective::{Objective, ObjectiveTree, ObjectiveType},
    omoospace::{create_omoospace, extract_pathname, CreateOptions, Omoospace, OmoospaceError},
    path::{make_file, make_path},
    profile::{
        items::{Maker, MakerData, Tool, ToolData, Work, WorkData},
        Language, Profile, ProfileError,
    },
    subspace::{is_ignore, NodeData, Subspace},
};
