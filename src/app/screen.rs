// SPDX-License-Identifier: MPL-2.0
//! Screens the user can navigate between.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Gallery,
    Settings,
}
