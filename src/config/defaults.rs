use crate::model::{CatalogEntry, SubdirectoryRoot};

pub const MIN_SUBDIRECTORY_GB: f64 = 0.5;
pub const TOP_SUBDIRECTORIES: usize = 10;

/// Locations that commonly make up macOS "System Data"
pub fn locations() -> Vec<CatalogEntry> {
    [
        // System caches and temporary files
        ("/Library/Caches", "System Caches", true),
        ("/private/var/folders", "System Temporary Files", true),
        ("/private/var/vm", "Virtual Memory Swap Files", true),
        ("/private/var/db", "System Databases", true),
        ("/private/var/log", "System Logs", true),
        ("/System/Library/Caches", "System Library Caches", true),
        // Time Machine
        ("/.MobileBackups", "Time Machine Local Snapshots", true),
        ("/private/var/db/.MobileBackups", "Time Machine Local Snapshots (Alt)", true),
        // User library
        ("~/Library/Caches", "User Library Caches", false),
        ("~/Library/Logs", "User Library Logs", false),
        ("~/Library/Application Support", "User Application Support", false),
        ("~/Library/Containers", "User App Containers", false),
        ("~/Library/Developer", "Xcode & Developer Files", false),
        // Containers and virtual machines
        ("~/Library/Containers/com.docker.docker", "Docker Data", false),
        ("~/Library/VirtualBox", "VirtualBox VMs", false),
        ("~/Library/Application Support/Parallels", "Parallels VMs", false),
        ("/private/var/containers", "System App Containers", true),
        // Spotlight
        ("/.Spotlight-V100", "Spotlight Index", true),
        ("~/.Spotlight-V100", "User Spotlight Index", false),
        ("~/Library/Mail", "Mail Data", false),
        ("~/Library/Application Support/MobileSync/Backup", "iOS Device Backups", false),
        // Package managers
        ("/opt/homebrew", "Homebrew (Apple Silicon)", true),
        ("/usr/local", "Homebrew (Intel)", true),
        ("~/node_modules", "Node Modules (Home)", false),
        ("~/.Trash", "Trash", false),
    ]
    .into_iter()
    .map(|(path, label, elevated)| CatalogEntry::new(path, label, elevated))
    .collect()
}

/// Roots whose immediate children are listed when large
pub fn subdirectory_roots() -> Vec<SubdirectoryRoot> {
    vec![
        SubdirectoryRoot::new("~/Library", "User Library subdirectories"),
        SubdirectoryRoot::new("/Library", "System Library subdirectories"),
        SubdirectoryRoot::new("/private/var", "System var subdirectories"),
    ]
}
