//! Fake AppImages for integration tests.
//!
//! A fake bundle is a shell script implementing `--appimage-extract <glob>`:
//! it creates `squashfs-root/` in its working directory and writes the
//! requested files there, like the AppImage runtime does.

#![allow(dead_code)]

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};

pub const DESKTOP: &str = "[Desktop Entry]
Type=Application
Name=My App
Exec=myapp %U
Icon=myapp
Categories=Utility;
";

/// Description of a fake bundle
pub struct FakeBundle<'a> {
    pub desktop_name: &'a str,
    pub desktop: &'a str,
    pub icons: &'a [&'a str],
    pub icon_data: &'a str,
}

impl Default for FakeBundle<'_> {
    fn default() -> Self {
        Self {
            desktop_name: "myapp.desktop",
            desktop: DESKTOP,
            icons: &["myapp.png"],
            icon_data: "icon-v1",
        }
    }
}

impl FakeBundle<'_> {
    /// Write the bundle script to `dir/file_name` and make it executable
    pub fn write(&self, dir: &Path, file_name: &str) -> PathBuf {
        let mut icons = String::new();
        for icon in self.icons {
            icons.push_str(&format!(
                "    printf '%s' '{}' > 'squashfs-root/{}'\n    echo 'squashfs-root/{}'\n",
                self.icon_data, icon, icon
            ));
        }

        let script = format!(
            "#!/bin/sh
[ \"$1\" = \"--appimage-extract\" ] || exit 2
mkdir -p squashfs-root
case \"$2\" in
  '*.desktop')
    cat > 'squashfs-root/{name}' <<'DESKTOP_EOF'
{desktop}DESKTOP_EOF
    echo 'squashfs-root/{name}'
    ;;
  '*.png')
{icons}    ;;
esac
exit 0
",
            name = self.desktop_name,
            desktop = self.desktop,
            icons = icons,
        );

        let path = dir.join(file_name);
        fs::write(&path, script).expect("Failed to write fake bundle");
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755))
            .expect("Failed to make fake bundle executable");
        path
    }
}
