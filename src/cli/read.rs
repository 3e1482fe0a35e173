use std::{io::BufReader, path::Path};

use otter_twise::{
    builder::dimacs::read_dimacs, structures::assignment_list::AssignmentList,
    types::err::ErrorKind,
};

pub(super) enum ReadError {
    FailedToOpen,
    ParseError(ErrorKind),
    #[cfg(not(feature = "xz"))]
    XzUnsupported,
}

impl std::fmt::Display for ReadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self {
            Self::FailedToOpen => write!(f, "Failed to open file."),
            Self::ParseError(err) => write!(f, "Parse error: '{err:?}'."),
            #[cfg(not(feature = "xz"))]
            Self::XzUnsupported => write!(f, "Reading xz compressed files requires the 'xz' feature."),
        }
    }
}

/// Reads the DIMACS file at `path` to an assignment list.
pub(super) fn load_dimacs(path: &Path) -> Result<AssignmentList, ReadError> {
    let file = match std::fs::File::open(path) {
        Ok(file) => file,
        Err(_) => return Err(ReadError::FailedToOpen),
    };

    let list = match path.extension() {
        #[cfg(feature = "xz")]
        Some(extension) if extension == "xz" => {
            read_dimacs(BufReader::new(xz2::read::XzDecoder::new(&file)))
        }

        #[cfg(not(feature = "xz"))]
        Some(extension) if extension == "xz" => return Err(ReadError::XzUnsupported),

        _ => read_dimacs(BufReader::new(&file)),
    };

    list.map_err(ReadError::ParseError)
}
