//! Authorization capability flags and the explicit option set built from them.

use std::{collections::BTreeSet, fmt};

use serde::{Deserialize, Serialize};

/// One platform-defined notification capability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuthorizationOption {
    /// App icon badge updates.
    Badge,
    /// Notification sounds.
    Sound,
    /// Banner/alert presentation.
    Alert,
    /// Presentation on a connected car display.
    CarPlay,
    /// Critical alerts that bypass do-not-disturb.
    CriticalAlert,
    /// Provisional (quiet) delivery without an explicit prompt.
    Provisional,
}

impl AuthorizationOption {
    /// Every option, in declaration order.
    pub const ALL: [Self; 6] = [
        Self::Badge,
        Self::Sound,
        Self::Alert,
        Self::CarPlay,
        Self::CriticalAlert,
        Self::Provisional,
    ];

    /// Returns a stable lowercase token for diagnostics and serialization.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Badge => "badge",
            Self::Sound => "sound",
            Self::Alert => "alert",
            Self::CarPlay => "car_play",
            Self::CriticalAlert => "critical_alert",
            Self::Provisional => "provisional",
        }
    }
}

impl fmt::Display for AuthorizationOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Set of [`AuthorizationOption`] values.
///
/// Backed by an ordered set so equality, iteration order, and rendering are deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AuthorizationOptions {
    inner: BTreeSet<AuthorizationOption>,
}

impl AuthorizationOptions {
    /// Creates an empty option set.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Inserts `option`, returning whether it was newly added.
    pub fn insert(&mut self, option: AuthorizationOption) -> bool {
        self.inner.insert(option)
    }

    /// Removes `option`, returning whether it was present.
    pub fn remove(&mut self, option: AuthorizationOption) -> bool {
        self.inner.remove(&option)
    }

    /// Returns whether `option` is a member.
    pub fn contains(&self, option: AuthorizationOption) -> bool {
        self.inner.contains(&option)
    }

    /// Returns whether every member of `other` is also a member of `self`.
    pub fn contains_all(&self, other: &Self) -> bool {
        other.inner.is_subset(&self.inner)
    }

    /// Returns whether every member of `self` is also a member of `other`.
    pub fn is_subset_of(&self, other: &Self) -> bool {
        self.inner.is_subset(&other.inner)
    }

    /// Returns the members of `self` that are not in `other`.
    pub fn subtracting(&self, other: &Self) -> Self {
        self.inner.difference(&other.inner).copied().collect()
    }

    /// Returns the members of either set.
    pub fn union(&self, other: &Self) -> Self {
        self.inner.union(&other.inner).copied().collect()
    }

    /// Returns the members common to both sets.
    pub fn intersection(&self, other: &Self) -> Self {
        self.inner.intersection(&other.inner).copied().collect()
    }

    /// Returns whether the set has no members.
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Returns the number of members.
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Iterates members in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = AuthorizationOption> + '_ {
        self.inner.iter().copied()
    }
}

impl FromIterator<AuthorizationOption> for AuthorizationOptions {
    fn from_iter<I: IntoIterator<Item = AuthorizationOption>>(iter: I) -> Self {
        Self {
            inner: iter.into_iter().collect(),
        }
    }
}

impl<const N: usize> From<[AuthorizationOption; N]> for AuthorizationOptions {
    fn from(options: [AuthorizationOption; N]) -> Self {
        options.into_iter().collect()
    }
}

impl Extend<AuthorizationOption> for AuthorizationOptions {
    fn extend<I: IntoIterator<Item = AuthorizationOption>>(&mut self, iter: I) {
        self.inner.extend(iter);
    }
}

impl fmt::Display for AuthorizationOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (index, option) in self.iter().enumerate() {
            if index > 0 {
                f.write_str(", ")?;
            }
            f.write_str(option.as_str())?;
        }
        f.write_str("]")
    }
}
