//! Console and exit-status contract of the entry point

use std::io::{self, Write};

use clientboot_core::{ClientPair, Resolved};

pub const WRITE_PREFIX: &str = "prisma.write is ";
pub const READ_PREFIX: &str = "prisma.read is ";
pub const FAILURE_HEADER: &str = "Failed to initialize prisma:";

/// Report the final outcome and return the process exit status
///
/// Success writes both data sources to `out` and returns 0. Failure writes
/// every message to `err` and returns 1.
pub fn report<O: Write, E: Write>(
    resolved: &Resolved<ClientPair>,
    out: &mut O,
    err: &mut E,
) -> io::Result<u8> {
    match resolved {
        Resolved::Success(clients) => {
            writeln!(out, "{}{}", WRITE_PREFIX, clients.write.db())?;
            writeln!(out, "{}{}", READ_PREFIX, clients.read.db())?;
            Ok(0)
        }
        Resolved::Failure(failures) => {
            writeln!(err, "{}", FAILURE_HEADER)?;
            for failure in failures {
                writeln!(err, "  {}", failure)?;
            }
            Ok(1)
        }
    }
}
