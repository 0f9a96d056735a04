//! Walk through an archive without extracting it.
//!
//! This example demonstrates the library API end to end:
//! - Opening an archive (plain, gzip or bzip2)
//! - Listing a directory and searching by basename
//! - Copying one file out to a real path
//! - Collecting the audit trail in memory
//!
//! # Usage
//!
//! ```bash
//! cargo run --example walkthrough -- archive.tar.gz
//! ```

use std::env;

use tarsh::{Archive, MemoryAudit, Navigator, Result, copy_out};

fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();
    if args.len() != 2 {
        eprintln!("Usage: {} <archive.tar[.gz|.bz2]>", args[0]);
        std::process::exit(2);
    }

    let archive = Archive::open_path(&args[1])?;
    println!(
        "Opened {} ({} entries, compression: {})",
        args[1],
        archive.index().len(),
        archive.compression()
    );

    let mut audit = MemoryAudit::new();
    let navigator = Navigator::new();

    println!("\nContents of /:");
    for name in navigator.ls(archive.index(), &mut audit, None)? {
        println!("  {}", name);
    }

    println!("\nEntries with 'txt' in the name:");
    for path in navigator.find(archive.index(), &mut audit, "txt")? {
        println!("  {}", path);
    }

    // Copy the first regular file out, next to the current directory
    if let Some(entry) = archive.index().entries().iter().find(|e| e.is_file()) {
        let source = format!("/{}", entry.path);
        let dest = format!("{}.copied", entry.name());
        match copy_out(&archive, navigator.cursor(), &mut audit, &source, &dest) {
            Ok(bytes) => println!("\nCopied {} ({} bytes) to {}", entry.path, bytes, dest),
            Err(e) => println!("\nCopy skipped: {}", e),
        }
    }

    println!("\nAudit trail:");
    for record in audit.records() {
        println!(
            "  {} {} - {}",
            record.timestamp.format("%Y-%m-%d %H:%M:%S"),
            record.action,
            record.detail
        );
    }

    Ok(())
}
