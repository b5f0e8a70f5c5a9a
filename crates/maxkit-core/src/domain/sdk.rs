//! SDK directory layout.
//!
//! Every path the pipeline derives from an installation root is produced
//! here, so the layout is written down exactly once:
//!
//! ```text
//! <root>/
//! ├── Examples/<TARGET>/<Template>/          ← scaffold sources
//! ├── Libraries/
//! │   ├── Boards/<TARGET>/<BSP>/             ← board support packages
//! │   ├── CMSIS/Device/Maxim/<TARGET>/Include
//! │   └── PeriphDrivers/Include/<TARGET>
//! └── Tools/
//!     ├── GNUTools/bin                       ← arm-none-eabi toolchain
//!     └── OpenOCD                            ← debug server
//! ```

use std::path::{Path, PathBuf};

use super::project::ToolchainPaths;
use super::target::TargetId;

pub const EXAMPLES_DIR: &str = "Examples";
pub const LIBRARIES_DIR: &str = "Libraries";
pub const BOARDS_DIR: &str = "Boards";

/// Per-target examples root: `<root>/Examples`.
pub fn examples_root(root: &Path) -> PathBuf {
    root.join(EXAMPLES_DIR)
}

/// Per-target BSP root: `<root>/Libraries/Boards`.
pub fn boards_root(root: &Path) -> PathBuf {
    root.join(LIBRARIES_DIR).join(BOARDS_DIR)
}

/// Example directory for one (target, template) pair.
pub fn example_dir(root: &Path, target: &TargetId, template: &str) -> PathBuf {
    examples_root(root).join(target.as_str()).join(template)
}

/// BSP directory for one (target, bsp) pair.
pub fn board_dir(root: &Path, target: &TargetId, bsp: &str) -> PathBuf {
    boards_root(root).join(target.as_str()).join(bsp)
}

/// Toolchain locations for a (target, bsp) pair.
///
/// Pure path arithmetic — nothing is probed on disk. Catalogs expose this
/// through [`crate::application::ports::SdkCatalog::toolchain`].
pub fn toolchain(root: &Path, target: &TargetId, bsp: &str) -> ToolchainPaths {
    let libraries = root.join(LIBRARIES_DIR);
    ToolchainPaths {
        sdk_root: root.to_path_buf(),
        gcc_bin: root.join("Tools").join("GNUTools").join("bin"),
        openocd: root.join("Tools").join("OpenOCD"),
        include_dirs: vec![
            libraries
                .join("CMSIS")
                .join("Device")
                .join("Maxim")
                .join(target.as_str())
                .join("Include"),
            libraries
                .join("PeriphDrivers")
                .join("Include")
                .join(target.as_str()),
            board_dir(root, target, bsp).join("Include"),
        ],
    }
}
