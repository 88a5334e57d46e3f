use clap::{Parser, Subcommand};

use transmerge_cli::{copy, extract, list, merge, update};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Commands,
}

/// Supported subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Copy the active branch's translation files into the archive.
    CopyBranch {
        /// Path of the repository to read the branch name from
        #[arg(short, long, default_value = "../project")]
        repository: String,

        /// Path of the translation files inside the repository
        #[arg(short, long, default_value = "src/assets/i18n")]
        i18n_folder: String,

        /// Archive directory that receives the branch folder
        #[arg(long, default_value = "i18n")]
        archive_root: String,
    },

    /// Merge one archived branch folder into another.
    Merge {
        /// Archived folder whose values overwrite the destination
        #[arg(short, long)]
        from: String,

        /// Archived folder that receives the changes
        #[arg(short, long)]
        to: String,

        /// Archive directory holding the branch folders
        #[arg(long, default_value = "i18n")]
        archive_root: String,

        /// Directory that receives merge results
        #[arg(long, default_value = "i18n-merged")]
        output_root: String,

        /// Cultures to process, comma separated
        #[arg(long, value_delimiter = ',', default_value = "en-us,es-es")]
        cultures: Vec<String>,
    },

    /// Merge an external deliverable folder into an archived branch folder.
    UpdateExternal {
        /// External folder whose values overwrite the destination
        #[arg(short, long)]
        external: String,

        /// Archived folder that receives the changes
        #[arg(short, long)]
        to: String,

        /// Directory holding the external deliverable folders
        #[arg(long, default_value = "external-files")]
        external_root: String,

        /// Archive directory holding the branch folders
        #[arg(long, default_value = "i18n")]
        archive_root: String,

        /// Directory that receives merge results
        #[arg(long, default_value = "i18n-merged")]
        output_root: String,

        /// Cultures to process, comma separated
        #[arg(long, value_delimiter = ',', default_value = "en-us,es-es")]
        cultures: Vec<String>,
    },

    /// List the branch folders in the archive.
    ListBranches {
        /// Archive directory holding the branch folders
        #[arg(long, default_value = "i18n")]
        archive_root: String,
    },

    /// List the external deliverable folders.
    ListExternal {
        /// Directory holding the external deliverable folders
        #[arg(long, default_value = "external-files")]
        external_root: String,
    },

    /// Extract the entries still waiting for translation from an archived folder.
    ExtractMissing {
        /// Archived folder to extract missing strings from
        #[arg(short, long)]
        folder: String,

        /// Archive directory holding the branch folders
        #[arg(long, default_value = "i18n")]
        archive_root: String,

        /// Directory that receives extraction results
        #[arg(long, default_value = "i18n-missing-strings")]
        output_root: String,

        /// Cultures to process, comma separated
        #[arg(long, value_delimiter = ',', default_value = "en-us,es-es")]
        cultures: Vec<String>,
    },
}

fn main() {
    let args = Args::parse();

    let result = match args.command {
        Commands::CopyBranch {
            repository,
            i18n_folder,
            archive_root,
        } => copy::run_copy_command(copy::CopyOptions {
            repository,
            i18n_folder,
            archive_root,
        }),
        Commands::Merge {
            from,
            to,
            archive_root,
            output_root,
            cultures,
        } => merge::run_merge_command(merge::MergeOptions {
            from,
            to,
            archive_root,
            output_root,
            cultures,
        }),
        Commands::UpdateExternal {
            external,
            to,
            external_root,
            archive_root,
            output_root,
            cultures,
        } => update::run_update_command(update::UpdateOptions {
            external,
            to,
            external_root,
            archive_root,
            output_root,
            cultures,
        }),
        Commands::ListBranches { archive_root } => list::run_list_command(list::ListOptions {
            root: archive_root,
        }),
        Commands::ListExternal { external_root } => list::run_list_command(list::ListOptions {
            root: external_root,
        }),
        Commands::ExtractMissing {
            folder,
            archive_root,
            output_root,
            cultures,
        } => extract::run_extract_command(extract::ExtractOptions {
            folder,
            archive_root,
            output_root,
            cultures,
        }),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
