//! Centralized icon definitions.
//!
//! Icon theme is configured in `config.rs` via `ICON_THEME`.
//! This module maps semantic icon names to the selected theme's icons.

use icondata::Icon;

use crate::config::IconTheme;
use crate::core::{DocumentFormat, FileKind, classify};

// =============================================================================
// Theme Imports
// =============================================================================

mod lucide {
    pub use icondata::{
        LuArchive as FileArchive, LuArrowLeft as Back, LuBookOpen as FilePdf,
        LuChevronLeft as ChevronLeft, LuChevronRight as ChevronRight,
        LuCornerDownLeft as Wrap, LuDownload as Download, LuExternalLink as ExternalLink,
        LuEye as Preview, LuFile as File, LuFileCode as FileCode, LuFileText as FileText,
        LuFilm as FileVideo, LuFolder as Folder, LuGitFork as Fork, LuGithub as GitHub,
        LuHouse as Home, LuImage as FileImage, LuLogOut as SignOut,
        LuMessageSquare as Chat, LuMusic as FileAudio, LuPencil as Edit,
        LuRefreshCw as Refresh, LuSend as Send, LuStar as Star, LuTriangleAlert as Warning,
        LuType as FileFont, LuUser as User, LuX as Close, LuZoomIn as ZoomIn,
        LuZoomOut as ZoomOut,
    };
}

mod bootstrap {
    pub use icondata::{
        BsArrowClockwise as Refresh, BsArrowLeft as Back, BsBoxArrowRight as SignOut,
        BsBoxArrowUpRight as ExternalLink, BsChatDots as Chat, BsChevronLeft as ChevronLeft,
        BsChevronRight as ChevronRight, BsDiagram2 as Fork, BsDownload as Download,
        BsExclamationTriangle as Warning, BsEye as Preview, BsFileEarmark as File,
        BsFileEarmarkCode as FileCode, BsFileEarmarkFont as FileFont,
        BsFileEarmarkImage as FileImage, BsFileEarmarkMusic as FileAudio,
        BsFileEarmarkPdf as FilePdf, BsFileEarmarkPlay as FileVideo,
        BsFileEarmarkText as FileText, BsFileEarmarkZip as FileArchive,
        BsFolderFill as Folder, BsGithub as GitHub, BsHouseFill as Home, BsPencil as Edit,
        BsPerson as User, BsSend as Send, BsStar as Star, BsTextWrap as Wrap, BsXLg as Close,
        BsZoomIn as ZoomIn, BsZoomOut as ZoomOut,
    };
}

// =============================================================================
// Icon Constants (selected based on theme)
// =============================================================================

macro_rules! themed_icon {
    ($name:ident, $theme_name:ident) => {
        pub const $name: Icon = match crate::config::ICON_THEME {
            IconTheme::Lucide => lucide::$theme_name,
            IconTheme::Bootstrap => bootstrap::$theme_name,
        };
    };
}

themed_icon!(CHEVRON_LEFT, ChevronLeft);
themed_icon!(CHEVRON_RIGHT, ChevronRight);
themed_icon!(HOME, Home);
themed_icon!(BACK, Back);
themed_icon!(REFRESH, Refresh);
themed_icon!(FOLDER, Folder);
themed_icon!(FILE, File);
themed_icon!(FILE_TEXT, FileText);
themed_icon!(FILE_CODE, FileCode);
themed_icon!(FILE_PDF, FilePdf);
themed_icon!(FILE_IMAGE, FileImage);
themed_icon!(FILE_VIDEO, FileVideo);
themed_icon!(FILE_AUDIO, FileAudio);
themed_icon!(FILE_FONT, FileFont);
themed_icon!(FILE_ARCHIVE, FileArchive);
themed_icon!(DOWNLOAD, Download);
themed_icon!(EXTERNAL_LINK, ExternalLink);
themed_icon!(ZOOM_IN, ZoomIn);
themed_icon!(ZOOM_OUT, ZoomOut);
themed_icon!(EDIT, Edit);
themed_icon!(PREVIEW, Preview);
themed_icon!(WRAP, Wrap);
themed_icon!(CHAT, Chat);
themed_icon!(SEND, Send);
themed_icon!(CLOSE, Close);
themed_icon!(SIGN_OUT, SignOut);
themed_icon!(STAR, Star);
themed_icon!(FORK, Fork);
themed_icon!(GITHUB, GitHub);
themed_icon!(WARNING, Warning);
themed_icon!(USER, User);

/// Icon for a file entry, by its name.
pub fn for_file(file_name: &str) -> Icon {
    let classified = classify(file_name);
    match classified.kind {
        FileKind::Image => FILE_IMAGE,
        FileKind::Video => FILE_VIDEO,
        FileKind::Audio => FILE_AUDIO,
        FileKind::Font => FILE_FONT,
        FileKind::Binary => match DocumentFormat::from_file_name(file_name) {
            DocumentFormat::Pdf => FILE_PDF,
            DocumentFormat::Archive => FILE_ARCHIVE,
            _ => FILE,
        },
        FileKind::Text | FileKind::Unknown => match classified.language_tag {
            None | Some("plaintext") | Some("markdown") => FILE_TEXT,
            Some(_) => FILE_CODE,
        },
    }
}
