//! File handles backed by direct filesystem access.
//!
//! Each handle memoizes what it learns: the normalized stat record, the text
//! content, and the symlink target are computed at most once per handle, and
//! a failed attempt is memoized like a successful one. Within one inspection
//! run a path therefore always reports the data from its first probe, even if
//! the file changes on disk in between.
//!
//! Notes:
//! - The stat record is built from a symlink-aware stat; the final symlink is
//!   not followed.
//! - The boolean predicates query the filesystem directly each time and
//!   follow symlinks, except `is_symlink`.
//! - Owner and group names degrade to absent when the id has no directory
//!   entry; the record never fails as a whole.

use std::cell::OnceCell;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::debug;
use sha2::{Digest, Sha256};

use crate::backend::FileResource;
use crate::types::Metadata;

use super::label::LabelProbe;

pub struct LocalFile {
    path: String,
    probe: LabelProbe,
    meta: OnceCell<Metadata>,
    content: OnceCell<Option<String>>,
    link: OnceCell<Option<PathBuf>>,
}

impl LocalFile {
    pub(crate) fn new(path: &str, probe: LabelProbe) -> Self {
        LocalFile {
            path: path.to_string(),
            probe,
            meta: OnceCell::new(),
            content: OnceCell::new(),
            link: OnceCell::new(),
        }
    }

    fn resolve_stat(&self) -> Metadata {
        let md = match fs::symlink_metadata(&self.path) {
            Ok(md) => md,
            Err(err) => {
                debug!("stat failed for {}: {err}", self.path);
                return Metadata::default();
            }
        };
        self.normalize(&md)
    }

    #[cfg(unix)]
    fn normalize(&self, md: &fs::Metadata) -> Metadata {
        use std::os::unix::fs::MetadataExt;

        use crate::constants::MODE_PERM_MASK;
        use crate::types::meta::classify_mode;

        let mode = md.mode();
        Metadata {
            file_type: Some(classify_mode(mode)),
            mode: Some(mode & MODE_PERM_MASK),
            mtime: Some(md.mtime()),
            size: Some(md.size()),
            owner: owner_name(md.uid()),
            group: group_name(md.gid()),
            selinux_label: self.probe.query(&self.path),
        }
    }

    /// Off unix there are no mode bits, ownership, or labels to normalize;
    /// report type and size only.
    #[cfg(not(unix))]
    fn normalize(&self, md: &fs::Metadata) -> Metadata {
        use crate::types::FileType;

        let ft = md.file_type();
        let file_type = if ft.is_symlink() {
            FileType::Symlink
        } else if ft.is_dir() {
            FileType::Directory
        } else if ft.is_file() {
            FileType::File
        } else {
            FileType::Unknown
        };
        Metadata {
            file_type: Some(file_type),
            size: Some(md.len()),
            selinux_label: self.probe.query(&self.path),
            ..Metadata::default()
        }
    }

    /// File type after following symlinks, for the boolean predicates.
    fn followed_type(&self) -> Option<fs::FileType> {
        fs::metadata(&self.path).map(|md| md.file_type()).ok()
    }
}

#[cfg(unix)]
fn owner_name(uid: u32) -> Option<String> {
    uzers::get_user_by_uid(uid).map(|user| user.name().to_string_lossy().into_owned())
}

#[cfg(unix)]
fn group_name(gid: u32) -> Option<String> {
    uzers::get_group_by_gid(gid).map(|group| group.name().to_string_lossy().into_owned())
}

impl FileResource for LocalFile {
    fn path(&self) -> &str {
        &self.path
    }

    fn stat(&self) -> &Metadata {
        self.meta.get_or_init(|| self.resolve_stat())
    }

    fn content(&self) -> Option<&str> {
        self.content
            .get_or_init(|| fs::read_to_string(&self.path).ok())
            .as_deref()
    }

    fn exists(&self) -> bool {
        fs::metadata(&self.path).is_ok()
    }

    fn is_file(&self) -> bool {
        self.followed_type().map(|ft| ft.is_file()).unwrap_or(false)
    }

    fn is_directory(&self) -> bool {
        self.followed_type().map(|ft| ft.is_dir()).unwrap_or(false)
    }

    fn is_symlink(&self) -> bool {
        fs::symlink_metadata(&self.path)
            .map(|md| md.file_type().is_symlink())
            .unwrap_or(false)
    }

    fn is_socket(&self) -> bool {
        #[cfg(unix)]
        {
            use std::os::unix::fs::FileTypeExt;
            self.followed_type().map(|ft| ft.is_socket()).unwrap_or(false)
        }
        #[cfg(not(unix))]
        {
            false
        }
    }

    fn is_pipe(&self) -> bool {
        #[cfg(unix)]
        {
            use std::os::unix::fs::FileTypeExt;
            self.followed_type().map(|ft| ft.is_fifo()).unwrap_or(false)
        }
        #[cfg(not(unix))]
        {
            false
        }
    }

    fn is_block_device(&self) -> bool {
        #[cfg(unix)]
        {
            use std::os::unix::fs::FileTypeExt;
            self.followed_type()
                .map(|ft| ft.is_block_device())
                .unwrap_or(false)
        }
        #[cfg(not(unix))]
        {
            false
        }
    }

    fn is_character_device(&self) -> bool {
        #[cfg(unix)]
        {
            use std::os::unix::fs::FileTypeExt;
            self.followed_type()
                .map(|ft| ft.is_char_device())
                .unwrap_or(false)
        }
        #[cfg(not(unix))]
        {
            false
        }
    }

    fn link_path(&self) -> Option<&Path> {
        self.link
            .get_or_init(|| {
                if !self.is_symlink() {
                    return None;
                }
                fs::read_link(&self.path).ok()
            })
            .as_deref()
    }

    fn sha256(&self) -> Option<String> {
        let mut file = fs::File::open(&self.path).ok()?;
        let mut hasher = Sha256::new();
        io::copy(&mut file, &mut hasher).ok()?;
        Some(hex::encode(hasher.finalize()))
    }
}
