//! DOF kinds, numbering pools and variable-grouping modes.

use std::fmt;

/// Physical type of a degree of freedom.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum DofKind {
    /// Velocity, at every cell origin
    Vp,
    /// Radial stress, shifted +dr/2; absent on the outer surface row
    Srp,
    /// Angular stress, shifted +dθ/2; absent on the last angular column
    Stp,
}

impl DofKind {
    /// Short name used in file names and logs.
    pub fn name(&self) -> &'static str {
        match self {
            DofKind::Vp => "vp",
            DofKind::Srp => "srp",
            DofKind::Stp => "stp",
        }
    }

    /// Label written in the merged stress table: 1 = srp, 2 = stp.
    ///
    /// vp is never written with a label; it maps to 0.
    pub fn label(&self) -> u8 {
        match self {
            DofKind::Vp => 0,
            DofKind::Srp => 1,
            DofKind::Stp => 2,
        }
    }

    /// Inverse of [`label`](Self::label) for the stress kinds.
    pub fn from_label(label: u8) -> Option<Self> {
        match label {
            1 => Some(DofKind::Srp),
            2 => Some(DofKind::Stp),
            _ => None,
        }
    }
}

impl fmt::Display for DofKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A global-ID numbering pool. Each pool is numbered from 0 independently.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum DofPool {
    Vp,
    /// Merged srp + stp pool of the two-group mode
    Sp,
    Srp,
    Stp,
}

impl DofPool {
    pub(crate) fn slot(&self) -> usize {
        match self {
            DofPool::Vp => 0,
            DofPool::Sp => 1,
            DofPool::Srp => 2,
            DofPool::Stp => 3,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            DofPool::Vp => "vp",
            DofPool::Sp => "sp",
            DofPool::Srp => "srp",
            DofPool::Stp => "stp",
        }
    }
}

impl fmt::Display for DofPool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// How the stress DOFs are grouped into numbering pools.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum VarGrouping {
    /// vp alone; srp and stp share the `sp` pool
    #[default]
    TwoGroups,
    /// vp, srp and stp each in their own pool
    ThreeGroups,
}

impl VarGrouping {
    /// Pool a DOF kind is numbered in under this grouping.
    pub fn pool_of(&self, kind: DofKind) -> DofPool {
        match (self, kind) {
            (_, DofKind::Vp) => DofPool::Vp,
            (VarGrouping::TwoGroups, _) => DofPool::Sp,
            (VarGrouping::ThreeGroups, DofKind::Srp) => DofPool::Srp,
            (VarGrouping::ThreeGroups, DofKind::Stp) => DofPool::Stp,
        }
    }

    /// Pools in use, in file/report order.
    pub fn pools(&self) -> &'static [DofPool] {
        match self {
            VarGrouping::TwoGroups => &[DofPool::Vp, DofPool::Sp],
            VarGrouping::ThreeGroups => &[DofPool::Vp, DofPool::Srp, DofPool::Stp],
        }
    }
}

impl fmt::Display for VarGrouping {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VarGrouping::TwoGroups => f.write_str("two-group (vp, sp)"),
            VarGrouping::ThreeGroups => f.write_str("three-group (vp, srp, stp)"),
        }
    }
}

/// Running global-ID counters, one per pool.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DofCounters {
    next: [usize; 4],
}

impl DofCounters {
    pub fn new() -> Self {
        Self::default()
    }

    /// Hand out the next ID of `pool`.
    #[inline]
    pub fn next_id(&mut self, pool: DofPool) -> usize {
        let slot = &mut self.next[pool.slot()];
        let id = *slot;
        *slot += 1;
        id
    }

    /// Number of IDs handed out so far in `pool` (= its dense size).
    #[inline]
    pub fn count(&self, pool: DofPool) -> usize {
        self.next[pool.slot()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels() {
        assert_eq!(DofKind::Srp.label(), 1);
        assert_eq!(DofKind::Stp.label(), 2);
        assert_eq!(DofKind::from_label(1), Some(DofKind::Srp));
        assert_eq!(DofKind::from_label(2), Some(DofKind::Stp));
        assert_eq!(DofKind::from_label(0), None);
    }

    #[test]
    fn test_pool_of() {
        let two = VarGrouping::TwoGroups;
        assert_eq!(two.pool_of(DofKind::Vp), DofPool::Vp);
        assert_eq!(two.pool_of(DofKind::Srp), DofPool::Sp);
        assert_eq!(two.pool_of(DofKind::Stp), DofPool::Sp);

        let three = VarGrouping::ThreeGroups;
        assert_eq!(three.pool_of(DofKind::Srp), DofPool::Srp);
        assert_eq!(three.pool_of(DofKind::Stp), DofPool::Stp);
        assert_eq!(three.pools().len(), 3);
    }

    #[test]
    fn test_counters_are_independent() {
        let mut c = DofCounters::new();
        assert_eq!(c.next_id(DofPool::Vp), 0);
        assert_eq!(c.next_id(DofPool::Vp), 1);
        assert_eq!(c.next_id(DofPool::Sp), 0);
        assert_eq!(c.count(DofPool::Vp), 2);
        assert_eq!(c.count(DofPool::Sp), 1);
        assert_eq!(c.count(DofPool::Srp), 0);
    }
}
