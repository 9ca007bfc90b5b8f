use clap::{Parser, Subcommand};
use folder_gallery::catalog::{self, Catalog, FolderId};
use folder_gallery::gallery::PageTree;
use folder_gallery::{config, index, listing, metadata, output, scan};
use std::path::PathBuf;

fn version_string() -> &'static str {
    let on_tag = env!("ON_RELEASE_TAG");
    if on_tag == "true" {
        env!("CARGO_PKG_VERSION")
    } else {
        let hash = env!("GIT_HASH");
        if hash.is_empty() {
            "dev@unknown"
        } else {
            // Leaked once at startup, called exactly once
            Box::leak(format!("dev@{hash}").into_boxed_str())
        }
    }
}

#[derive(Parser)]
#[command(name = "folder-gallery")]
#[command(about = "Filesystem-backed photo gallery indexer and browser")]
#[command(long_about = "\
Filesystem-backed photo gallery indexer and browser

Your filesystem is the data source. Every directory under the gallery root
becomes an album, ordered and titled by its numeric prefix, and every image
in it gets a description derived from its filename.

Gallery structure:

  gallery/
  ├── gallery.toml                 # Config (optional, stock defaults apply)
  ├── 010-Landscapes/              # Album (prefix orders, name titles)
  │   ├── 01-dawn.jpg              # Image (\"dawn\")
  │   ├── 02-city_lights.jpg      # Image (\"city lights\")
  │   └── 010-Winter/              # Nested album
  │       └── 01-lift.jpg
  └── 020-Sea/
      └── 01-wave.jpg

'scan' rebuilds the whole catalog from disk; the listing and browse commands
read the saved catalog without touching the gallery. Catalog state lands in
.folder-gallery/ (override with --state-dir). Dot-directories are never
scanned, so the state directory can live inside the gallery root.

Capture dates resolve EXIF DateTimeOriginal, then DateTime, then the file's
own creation time. 'refresh' recomputes the stored EXIF dates explicitly.

Run 'folder-gallery gen-config' to print a documented gallery.toml.")]
#[command(version = version_string())]
struct Cli {
    /// Gallery root directory
    #[arg(long, default_value = "gallery", global = true)]
    root: PathBuf,

    /// Directory for the saved catalog
    #[arg(long, default_value = ".folder-gallery", global = true)]
    state_dir: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(clap::Args, Clone)]
struct ListArgs {
    /// Folder id to list under (default: the gallery root)
    #[arg(long)]
    folder: Option<u32>,

    /// 1-based page number
    #[arg(long, default_value_t = 1)]
    page: usize,
}

#[derive(clap::Args, Clone)]
struct ImagesArgs {
    /// Folder id to list
    #[arg(long)]
    folder: u32,

    /// 1-based page number
    #[arg(long, default_value_t = 1)]
    page: usize,
}

#[derive(clap::Args, Clone)]
struct BrowseArgs {
    /// Page URL path, e.g. /Landscapes/Winter (default: the front page)
    #[arg(long, default_value = "/")]
    path: String,

    /// 1-based page number for the image listing
    #[arg(long, default_value_t = 1)]
    page: usize,
}

#[derive(clap::Args, Clone)]
struct RefreshArgs {
    /// Folder id to refresh (default: every folder in the catalog)
    #[arg(long)]
    folder: Option<u32>,
}

#[derive(Subcommand)]
enum Command {
    /// Scan the gallery root into a catalog
    Scan,
    /// Validate the gallery root and config without writing state
    Check,
    /// List child albums of a folder, with counts and covers
    Albums(ListArgs),
    /// List the images directly inside a folder
    Images(ImagesArgs),
    /// Resolve a page URL to its breadcrumbs, albums and images
    Browse(BrowseArgs),
    /// Recompute stored EXIF capture dates
    Refresh(RefreshArgs),
    /// Print a stock gallery.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Command::Scan => {
            config::load_config(&cli.root)?;
            let catalog = scan::scan(&cli.root)?;
            catalog.save(&cli.state_dir)?;
            output::print_scan_output(&catalog, config_file_exists(&cli.root));
            println!(
                "==> Catalog saved to {}",
                catalog::catalog_path(&cli.state_dir).display()
            );
        }
        Command::Check => {
            println!("==> Checking {}", cli.root.display());
            let config = config::load_config(&cli.root)?;
            let catalog = scan::scan(&cli.root)?;
            output::print_scan_output(&catalog, config_file_exists(&cli.root));
            println!(
                "==> Gallery is valid ({} refresh threads)",
                config::effective_threads(&config.processing)
            );
        }
        Command::Albums(args) => {
            let config = config::load_config(&cli.root)?;
            let catalog = Catalog::load(&cli.state_dir)?;
            let parent = match args.folder {
                Some(id) => FolderId(id),
                None => catalog.root_folder().map(|f| f.id).unwrap_or(FolderId(0)),
            };
            let albums =
                index::list_albums(&catalog, parent, config.sort_key(), config.sort_direction());
            let slice = listing::paginate(albums, config.albums_per_page(), args.page)?;
            output::print_album_listing(&folder_label(&catalog, parent), &slice);
        }
        Command::Images(args) => {
            let config = config::load_config(&cli.root)?;
            let catalog = Catalog::load(&cli.state_dir)?;
            let folder = FolderId(args.folder);
            let images =
                index::list_images(&catalog, folder, config.sort_key(), config.sort_direction())?;
            let owned: Vec<_> = images.into_iter().cloned().collect();
            let slice = listing::paginate(owned, config.images_per_page(), args.page)?;
            output::print_image_listing(
                &folder_label(&catalog, folder),
                &slice,
                config.sort_key(),
                config.sort_direction(),
                &config,
            );
        }
        Command::Browse(args) => {
            let config = config::load_config(&cli.root)?;
            let catalog = Catalog::load(&cli.state_dir)?;
            let tree = PageTree::mirror(&catalog, &config);

            match tree.page_by_url(&args.path) {
                Some(page) => {
                    let page = page.clone();
                    let crumbs = tree.breadcrumbs(page.id, &config);
                    let albums = tree.albums_page(Some(page.id), &catalog, &config, 1)?;
                    let images = tree.images(page.id, &catalog, &config, args.page)?;
                    output::print_browse_output(
                        &crumbs,
                        &albums,
                        images.as_ref(),
                        page.effective_sort(),
                        &config,
                    );
                }
                // The front page is not a mirrored page; it lists the root albums
                None if args.path.split('/').all(|s| s.is_empty()) => {
                    let albums = tree.albums_page(None, &catalog, &config, args.page)?;
                    output::print_browse_output(
                        &[],
                        &albums,
                        None,
                        (config.sort_key(), config.sort_direction()),
                        &config,
                    );
                }
                None => println!("No page at {}", args.path),
            }
        }
        Command::Refresh(args) => {
            let config = config::load_config(&cli.root)?;
            let mut catalog = Catalog::load(&cli.state_dir)?;
            init_thread_pool(&config.processing);

            let targets: Vec<FolderId> = match args.folder {
                Some(id) => vec![FolderId(id)],
                None => catalog.folders.iter().map(|f| f.id).collect(),
            };
            let outcomes: Vec<_> = targets
                .into_iter()
                .map(|folder| metadata::write_exif_dates(&mut catalog, folder))
                .collect();
            catalog.save(&cli.state_dir)?;
            output::print_refresh_output(&catalog, &outcomes);
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}

fn config_file_exists(root: &std::path::Path) -> bool {
    root.join(config::CONFIG_FILENAME).exists()
}

/// Listing title for a folder: its title, or a placeholder for the root
/// and for ids the catalog does not know.
fn folder_label(catalog: &Catalog, id: FolderId) -> String {
    match catalog.folder(id) {
        Some(folder) if folder.path.is_empty() => "the gallery root".to_string(),
        Some(folder) => folder.title.clone(),
        None => format!("folder {id}"),
    }
}

/// Initialize the rayon thread pool based on processing config.
///
/// Caps at the number of available CPU cores; config can constrain down,
/// not up.
fn init_thread_pool(processing: &config::ProcessingConfig) {
    let threads = config::effective_threads(processing);
    rayon::ThreadPoolBuilder::new()
        .num_threads(threads)
        .build_global()
        .ok();
}
