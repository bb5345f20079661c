//! Launcher descriptor rewriting.
//!
//! The `.desktop` file shipped inside a bundle refers to the program and icon
//! by names that only make sense inside the bundle. Three keys are rewritten
//! so the installed entry launches the bundle itself:
//!
//! - `Exec=`: the program token becomes the quoted bundle path, arguments are kept
//! - `Categories=`: the menu category tag is appended
//! - `Icon=`: the value becomes a path into the icons directory
//!
//! Every other line is copied byte for byte, whatever its encoding. Matching
//! is on the exact key, so localized variants like `Icon[de]=` pass through.

use std::path::Path;

const EXEC_KEY: &[u8] = b"Exec=";
const CATEGORIES_KEY: &[u8] = b"Categories=";
const ICON_KEY: &[u8] = b"Icon=";

/// Rewrites descriptor lines for one bundle
#[derive(Debug, Clone, Copy)]
pub struct DescriptorRewriter<'a> {
    bundle: &'a Path,
    icons_dir: &'a Path,
    category: &'a str,
}

impl<'a> DescriptorRewriter<'a> {
    /// Rewriter pointing entries at `bundle`, icons at `icons_dir`, tagged with `category`
    pub fn new(bundle: &'a Path, icons_dir: &'a Path, category: &'a str) -> Self {
        Self {
            bundle,
            icons_dir,
            category,
        }
    }

    /// Rewrite a whole descriptor.
    ///
    /// Lines are split on `\n` with a trailing `\r` dropped, and every output
    /// line ends with `\n`.
    pub fn rewrite(&self, contents: &[u8]) -> Vec<u8> {
        let mut out = Vec::with_capacity(contents.len() + 128);
        if contents.is_empty() {
            return out;
        }
        let body = contents.strip_suffix(b"\n").unwrap_or(contents);
        for line in body.split(|&b| b == b'\n') {
            let line = line.strip_suffix(b"\r").unwrap_or(line);
            out.extend_from_slice(&self.rewrite_line(line));
            out.push(b'\n');
        }
        out
    }

    /// Rewrite a single line
    pub fn rewrite_line(&self, line: &[u8]) -> Vec<u8> {
        if let Some(command) = line.strip_prefix(EXEC_KEY) {
            let mut out = EXEC_KEY.to_vec();
            out.extend_from_slice(&quote_exec_path(self.bundle));
            if let Some(space) = command.iter().position(|&b| b == b' ') {
                out.extend_from_slice(&command[space..]);
            }
            out
        } else if let Some(categories) = line.strip_prefix(CATEGORIES_KEY) {
            let mut out = line.to_vec();
            if !categories.is_empty() && !categories.ends_with(b";") {
                out.push(b';');
            }
            out.extend_from_slice(self.category.as_bytes());
            out.push(b';');
            out
        } else if let Some(icon) = line.strip_prefix(ICON_KEY) {
            let mut out = ICON_KEY.to_vec();
            out.extend_from_slice(self.icons_dir.as_os_str().as_encoded_bytes());
            out.push(b'/');
            out.extend_from_slice(icon);
            out.extend_from_slice(b".png");
            out
        } else {
            line.to_vec()
        }
    }
}

/// Quote `path` as the program argument of an `Exec=` value.
///
/// Single quotes are used unless the path contains one. Such paths fall back
/// to the double-quoted form of the Desktop Entry spec: `"`, `` ` ``, `$` and
/// `\` get a backslash, and each backslash is then doubled for the string
/// escape applied to every value. A literal `%` is always written as `%%`.
fn quote_exec_path(path: &Path) -> Vec<u8> {
    let raw = path.as_os_str().as_encoded_bytes();
    let mut out = Vec::with_capacity(raw.len() + 8);

    if !raw.contains(&b'\'') {
        out.push(b'\'');
        for &b in raw {
            if b == b'%' {
                out.push(b'%');
            }
            out.push(b);
        }
        out.push(b'\'');
        return out;
    }

    out.push(b'"');
    for &b in raw {
        match b {
            b'"' | b'`' | b'$' => out.extend_from_slice(&[b'\\', b'\\', b]),
            b'\\' => out.extend_from_slice(b"\\\\\\\\"),
            b'%' => out.extend_from_slice(b"%%"),
            _ => out.push(b),
        }
    }
    out.push(b'"');
    out
}
