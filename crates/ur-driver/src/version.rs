//! 控制器版本
//!
//! 版本由状态通道在启动时读取，再由编排层通过一次显式握手
//! （`UrDriver::set_controller_version`）交给驱动。

use crate::error::DriverError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// 控制器软件版本（如 `3.2`）
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ControllerVersion {
    pub major: u32,
    pub minor: u32,
}

impl ControllerVersion {
    pub const fn new(major: u32, minor: u32) -> Self {
        Self { major, minor }
    }
}

impl fmt::Display for ControllerVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)
    }
}

impl FromStr for ControllerVersion {
    type Err = DriverError;

    /// 解析 `major.minor`，忽略更细的版本段（如 `3.2.18744`）
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || DriverError::InvalidVersion(s.to_string());

        let mut parts = s.trim().split('.');
        let major = parts
            .next()
            .and_then(|p| p.parse().ok())
            .ok_or_else(invalid)?;
        let minor = match parts.next() {
            Some(p) => p.parse().map_err(|_| invalid())?,
            None => 0,
        };

        Ok(Self { major, minor })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_version() {
        assert_eq!(
            "3.2".parse::<ControllerVersion>().unwrap(),
            ControllerVersion::new(3, 2)
        );
        assert_eq!(
            "3.2.18744".parse::<ControllerVersion>().unwrap(),
            ControllerVersion::new(3, 2)
        );
        assert_eq!(
            " 1 ".parse::<ControllerVersion>().unwrap(),
            ControllerVersion::new(1, 0)
        );
    }

    #[test]
    fn test_parse_invalid_version() {
        assert!("".parse::<ControllerVersion>().is_err());
        assert!("x.1".parse::<ControllerVersion>().is_err());
        assert!("3.y".parse::<ControllerVersion>().is_err());
    }

    #[test]
    fn test_version_ordering_and_display() {
        assert!(ControllerVersion::new(3, 1) < ControllerVersion::new(3, 2));
        assert!(ControllerVersion::new(1, 8) < ControllerVersion::new(3, 0));
        assert_eq!(ControllerVersion::new(3, 2).to_string(), "3.2");
    }
}
