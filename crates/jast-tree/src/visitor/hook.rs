// Copyright (c) jast contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! Hook names: `enter_<Kind>`, `leave_<Kind>` and `catch_Catch`.

use std::fmt;
use std::str::FromStr;

use crate::error::TreeError;
use crate::nodes::NodeKind;

/// When a hook fires relative to its node's children.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Phase {
    Enter,
    Leave,
    /// Once per catch clause of a `try` statement.
    Catch,
}

impl Phase {
    pub const ALL: [Phase; 3] = [Phase::Enter, Phase::Leave, Phase::Catch];

    pub fn prefix(self) -> &'static str {
        match self {
            Phase::Enter => "enter_",
            Phase::Leave => "leave_",
            Phase::Catch => "catch_",
        }
    }
}

/// A hook, identified by phase and node kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Hook {
    pub phase: Phase,
    pub kind: NodeKind,
}

impl Hook {
    pub fn enter(kind: NodeKind) -> Self {
        Hook {
            phase: Phase::Enter,
            kind,
        }
    }

    pub fn leave(kind: NodeKind) -> Self {
        Hook {
            phase: Phase::Leave,
            kind,
        }
    }

    /// The catch-clause hook. Only exists for [`NodeKind::Catch`].
    pub fn catch() -> Self {
        Hook {
            phase: Phase::Catch,
            kind: NodeKind::Catch,
        }
    }
}

impl fmt::Display for Hook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.phase.prefix(), self.kind)
    }
}

impl FromStr for Hook {
    type Err = TreeError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        let (phase, kind_name) = Phase::ALL
            .iter()
            .find_map(|&phase| name.strip_prefix(phase.prefix()).map(|rest| (phase, rest)))
            .ok_or_else(|| {
                TreeError::invalid_hook_name(name, "expected an enter_, leave_ or catch_ prefix")
            })?;

        let kind = NodeKind::from_name(kind_name).ok_or_else(|| {
            TreeError::invalid_hook_name(name, format!("unknown node kind '{kind_name}'"))
        })?;

        if phase == Phase::Catch && kind != NodeKind::Catch {
            return Err(TreeError::invalid_hook_name(
                name,
                "catch hooks only exist for Catch",
            ));
        }

        Ok(Hook { phase, kind })
    }
}
