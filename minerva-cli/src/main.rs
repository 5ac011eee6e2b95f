//! Minerva CLI
//!
//! Command-line front end for the Minerva learning platform: browse the
//! catalog, connect a wallet, purchase paid content, track completion,
//! and inspect badges. Wallet interactions run against the simulated
//! provider; the flow, ledger, and unlock semantics are the real ones.

use anyhow::Result;
use clap::{Parser, Subcommand};
use sha2::{Digest, Sha256};
use std::path::PathBuf;
use std::sync::Arc;

use minerva_catalog::{BookFilter, Catalog};
use minerva_progress::{CompletionTracker, UserPreferences, UserProfile};
use minerva_store::{keys, ProfileStore};
use minerva_unlock::{LedgerKind, Listing, Notice, NoticeKind, Outcome, PurchaseEngine, PurchaseLedger};
use minerva_wallet::{eth, SignerBehavior, SimulatedWallet, WalletEvent, WalletSession};

#[derive(Parser)]
#[command(name = "minerva")]
#[command(about = "Minerva - wallet-gated e-learning platform")]
#[command(version)]
struct Cli {
    /// Override the profile data directory
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List courses and library books with unlock and completion state
    Catalog {
        /// Book shelf filter: all, free, paid, audio
        #[arg(short, long, default_value = "all")]
        filter: String,
    },

    /// Connect a wallet account to this profile
    Connect {
        /// Account address; derived from the profile when omitted
        #[arg(short, long)]
        account: Option<String>,
    },

    /// Disconnect the wallet from this profile
    Disconnect,

    /// Switch the active wallet account
    SwitchAccount {
        /// New active account address
        account: String,
    },

    /// Purchase a paid course or book
    Buy {
        /// Course id or title
        #[arg(long, conflicts_with = "book")]
        course: Option<String>,

        /// Book id or title
        #[arg(long)]
        book: Option<String>,

        /// Simulate the signer declining the payment prompt
        #[arg(long)]
        decline: bool,

        /// Simulate a submission failure with this provider message
        #[arg(long)]
        fail: Option<String>,
    },

    /// Mark a course completed (or not)
    Complete {
        /// Course id
        course_id: String,

        /// Uncheck instead of checking
        #[arg(long)]
        undo: bool,
    },

    /// Show earned badges
    Badges,

    /// Show or edit the user profile
    Profile {
        #[command(subcommand)]
        command: ProfileCommands,
    },

    /// Show wallet and library status
    Status,

    /// Run a scripted end-to-end purchase scenario
    Demo,
}

#[derive(Subcommand)]
enum ProfileCommands {
    /// Show the stored profile and preferences
    Show,

    /// Set the display name
    SetName { name: String },

    /// Set the avatar image path
    SetAvatar { image: String },

    /// Record onboarding preferences
    Prefs {
        /// Age group, e.g. 18-24
        #[arg(long, default_value = "")]
        age_group: String,

        /// Accessibility assistance wanted
        #[arg(long)]
        disability: bool,

        /// Interest topics (repeatable)
        #[arg(long = "interest")]
        interests: Vec<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();
    let store = open_store(cli.data_dir.as_deref())?;

    match cli.command {
        Commands::Catalog { filter } => cmd_catalog(&store, &filter),
        Commands::Connect { account } => cmd_connect(&store, account).await,
        Commands::Disconnect => cmd_disconnect(&store),
        Commands::SwitchAccount { account } => cmd_switch_account(&store, account),
        Commands::Buy { course, book, decline, fail } => {
            cmd_buy(&store, course, book, decline, fail).await
        }
        Commands::Complete { course_id, undo } => cmd_complete(&store, &course_id, !undo),
        Commands::Badges => cmd_badges(&store),
        Commands::Profile { command } => cmd_profile(&store, command),
        Commands::Status => cmd_status(&store),
        Commands::Demo => cmd_demo().await,
    }
}

fn open_store(data_dir: Option<&std::path::Path>) -> Result<ProfileStore> {
    let store = match data_dir {
        Some(dir) => ProfileStore::open(dir)?,
        None => ProfileStore::open_default()?,
    };
    tracing::debug!(root = %store.root().display(), "profile store opened");
    Ok(store)
}

fn stored_account(store: &ProfileStore) -> Option<String> {
    let account: Option<String> = store.read_json(keys::WALLET_ADDRESS);
    account
}

/// Deterministic simulated address for this profile
fn derive_sim_address(store: &ProfileStore) -> String {
    let mut hasher = Sha256::new();
    hasher.update(b"minerva-sim-account:");
    hasher.update(store.root().to_string_lossy().as_bytes());
    let digest = hex::encode(hasher.finalize());
    format!("0x{}", &digest[..40])
}

/// Session over the simulated provider, granted when an account is stored
fn build_session(store: &ProfileStore) -> (Arc<WalletSession>, Option<Arc<SimulatedWallet>>) {
    match stored_account(store) {
        Some(account) => {
            let wallet = Arc::new(SimulatedWallet::new(vec![account]));
            wallet.grant();
            (Arc::new(WalletSession::new(Some(wallet.clone()))), Some(wallet))
        }
        None => (Arc::new(WalletSession::new(None)), None),
    }
}

fn print_notice(notice: &Notice) {
    let label = match notice.kind {
        NoticeKind::Info => "note",
        NoticeKind::Cancelled => "cancelled",
        NoticeKind::Error => "error",
    };
    println!("  [{}] {} (auto-dismiss {}s)", label, notice.message, notice.dismiss_after_secs);
}

fn cmd_catalog(store: &ProfileStore, filter: &str) -> Result<()> {
    let filter = match filter {
        "all" => BookFilter::All,
        "free" => BookFilter::Free,
        "paid" => BookFilter::Paid,
        "audio" => BookFilter::Audio,
        other => anyhow::bail!("Unknown filter: {}. Use all, free, paid, or audio", other),
    };

    let catalog = Catalog::builtin();
    let account = stored_account(store);
    let completion = CompletionTracker::open(store.clone());

    let (session, _) = build_session(store);
    let course_engine = PurchaseEngine::new(
        session.clone(),
        PurchaseLedger::open(store.clone(), LedgerKind::Courses),
    );
    let book_engine = PurchaseEngine::new(
        session,
        PurchaseLedger::open(store.clone(), LedgerKind::Books),
    );
    if let Some(account) = &account {
        // Adopt the stored account so the views are account-scoped
        let accounts = vec![account.clone()];
        course_engine.handle_event(&WalletEvent::AccountsChanged(accounts.clone()));
        book_engine.handle_event(&WalletEvent::AccountsChanged(accounts));
    }

    println!("\n  COURSES");
    println!("  =======\n");
    for course in catalog.courses() {
        let listing = Listing::from(course);
        let access = if !course.is_paid {
            "free"
        } else if course_engine.is_unlocked(&listing) {
            "owned"
        } else {
            "locked"
        };
        let done = if completion.is_completed(&course.id) { "x" } else { " " };
        println!(
            "  [{}] {:22} {:32} {:8} {:9} {}",
            done, course.id, course.title, access, course.duration, course.instructor
        );
    }

    println!("\n  LIBRARY");
    println!("  =======\n");
    for book in catalog.filtered_books(filter) {
        let listing = Listing::from(book);
        let access = if !book.is_paid {
            "free"
        } else if book_engine.is_unlocked(&listing) {
            "owned"
        } else {
            "locked"
        };
        let kind = if book.is_audio { "audio" } else { "text" };
        println!("  {:2}  {:34} {:8} {:6} {}", book.id, book.title, access, kind, book.author);
    }
    println!();

    Ok(())
}

async fn cmd_connect(store: &ProfileStore, account: Option<String>) -> Result<()> {
    let account = account.unwrap_or_else(|| derive_sim_address(store));
    let wallet = Arc::new(SimulatedWallet::new(vec![account]));
    let session = WalletSession::new(Some(wallet));

    let granted = session.request_connect().await?;
    store.write_json(keys::WALLET_ADDRESS, &Some(granted.clone()))?;

    println!("  {}", session.status());
    println!("  Stored as the active account for this profile.");
    Ok(())
}

fn cmd_disconnect(store: &ProfileStore) -> Result<()> {
    store.remove(keys::WALLET_ADDRESS)?;
    println!("  Wallet disconnected. Paid content is locked again.");
    Ok(())
}

fn cmd_switch_account(store: &ProfileStore, account: String) -> Result<()> {
    store.write_json(keys::WALLET_ADDRESS, &Some(account.clone()))?;
    println!("  Active account is now {}", eth::shorten(&account));
    println!("  Unlock state is re-derived per account; purchases made by other");
    println!("  accounts on this profile will show as locked.");
    Ok(())
}

async fn cmd_buy(
    store: &ProfileStore,
    course: Option<String>,
    book: Option<String>,
    decline: bool,
    fail: Option<String>,
) -> Result<()> {
    let catalog = Catalog::builtin();
    let (kind, listing, title) = match (&course, &book) {
        (Some(wanted), None) => {
            let course = catalog
                .course_by_id(wanted)
                .or_else(|| catalog.course_by_title(wanted))
                .ok_or_else(|| anyhow::anyhow!("Unknown course: {}", wanted))?;
            (LedgerKind::Courses, Listing::from(course), course.title.clone())
        }
        (None, Some(wanted)) => {
            let book = wanted
                .parse::<u32>()
                .ok()
                .and_then(|id| catalog.book_by_id(id))
                .or_else(|| catalog.book_by_title(wanted))
                .ok_or_else(|| anyhow::anyhow!("Unknown book: {}", wanted))?;
            (LedgerKind::Books, Listing::from(book), book.title.clone())
        }
        _ => anyhow::bail!("Specify exactly one of --course or --book"),
    };

    // No stored account: offer the connect prompt as part of the flow
    let (session, wallet) = match stored_account(store) {
        Some(_) => build_session(store),
        None => {
            let address = derive_sim_address(store);
            let wallet = Arc::new(SimulatedWallet::new(vec![address]));
            (Arc::new(WalletSession::new(Some(wallet.clone()))), Some(wallet))
        }
    };
    session.connect().await?;

    if let Some(wallet) = &wallet {
        if decline {
            wallet.set_behavior(SignerBehavior::RejectPayment);
        } else if let Some(message) = fail {
            wallet.set_behavior(SignerBehavior::FailPayment(message));
        }
    }

    let engine = PurchaseEngine::new(session.clone(), PurchaseLedger::open(store.clone(), kind));

    println!("  Buying \"{}\" ({} ETH)...", title, listing.price_eth);
    match engine.buy(&listing).await {
        Outcome::Unlocked { transaction_hash } => {
            // First purchase may have connected the wallet; keep it
            if let Some(account) = session.current_account() {
                store.write_json(keys::WALLET_ADDRESS, &Some(account))?;
            }
            println!("  Purchased successfully!");
            println!("  Transaction: {}", transaction_hash);
        }
        Outcome::AlreadyUnlocked => println!("  Already accessible - nothing to buy."),
        Outcome::InProgress => println!("  A purchase for this item is already pending."),
        Outcome::NoWallet(notice) | Outcome::Cancelled(notice) | Outcome::Failed(notice) => {
            print_notice(&notice);
        }
    }
    Ok(())
}

fn cmd_complete(store: &ProfileStore, course_id: &str, completed: bool) -> Result<()> {
    let catalog = Catalog::builtin();
    if catalog.course_by_id(course_id).is_none() {
        anyhow::bail!("Unknown course id: {}", course_id);
    }

    let mut tracker = CompletionTracker::open(store.clone());
    tracker.set_completed(course_id, completed);

    let state = if completed { "completed" } else { "not completed" };
    println!("  Course {} marked {}.", course_id, state);

    let badges = tracker.badge_state();
    println!(
        "  Completed: {}  |  beginner badge: {}  intermediate badge: {}",
        tracker.completed_count(),
        if badges.beginner_badge { "earned" } else { "locked" },
        if badges.intermediate_badge { "earned" } else { "locked" },
    );
    Ok(())
}

fn cmd_badges(store: &ProfileStore) -> Result<()> {
    let tracker = CompletionTracker::open(store.clone());
    let badges = tracker.badge_state();

    println!("\n  BADGES");
    println!("  ======\n");
    println!("  Completed courses: {}", tracker.completed_count());
    println!(
        "  Beginner     ({}+ courses): {}",
        minerva_progress::BEGINNER_BADGE_AT,
        if badges.beginner_badge { "EARNED" } else { "locked" }
    );
    println!(
        "  Intermediate ({}+ courses): {}",
        minerva_progress::INTERMEDIATE_BADGE_AT,
        if badges.intermediate_badge { "EARNED" } else { "locked" }
    );
    println!();
    Ok(())
}

fn cmd_profile(store: &ProfileStore, command: ProfileCommands) -> Result<()> {
    match command {
        ProfileCommands::Show => {
            let profile = UserProfile::load(store);
            let prefs = UserPreferences::load(store);

            println!("\n  PROFILE");
            println!("  =======\n");
            let name = if profile.display_name.is_empty() { "(not set)" } else { &profile.display_name };
            let avatar = if profile.profile_image.is_empty() { "(not set)" } else { &profile.profile_image };
            println!("  Name:    {}", name);
            println!("  Avatar:  {}", avatar);
            match stored_account(store) {
                Some(account) => println!("  Wallet:  {}", eth::shorten(&account)),
                None => println!("  Wallet:  not connected"),
            }
            if !prefs.age_group.is_empty() || !prefs.interests.is_empty() {
                println!("  Age:     {}", if prefs.age_group.is_empty() { "-" } else { &prefs.age_group });
                println!("  Assist:  {}", if prefs.has_disability { "yes" } else { "no" });
                println!("  Topics:  {}", prefs.interests.join(", "));
            }
            println!();
        }
        ProfileCommands::SetName { name } => {
            let mut profile = UserProfile::load(store);
            profile.display_name = name;
            profile.save(store)?;
            println!("  Display name saved.");
        }
        ProfileCommands::SetAvatar { image } => {
            let mut profile = UserProfile::load(store);
            profile.profile_image = image;
            profile.save(store)?;
            println!("  Avatar saved.");
        }
        ProfileCommands::Prefs { age_group, disability, interests } => {
            let prefs = UserPreferences {
                age_group,
                has_disability: disability,
                interests,
            };
            prefs.save(store)?;
            println!("  Preferences saved.");
        }
    }
    Ok(())
}

fn cmd_status(store: &ProfileStore) -> Result<()> {
    let (session, _) = build_session(store);
    if let Some(account) = stored_account(store) {
        session.handle_event(&WalletEvent::AccountsChanged(vec![account]));
    }

    let courses = PurchaseLedger::open(store.clone(), LedgerKind::Courses);
    let books = PurchaseLedger::open(store.clone(), LedgerKind::Books);
    let tracker = CompletionTracker::open(store.clone());

    println!("\n  MINERVA STATUS");
    println!("  ==============\n");
    println!("  {}", session.status());
    println!("  Data dir:          {}", store.root().display());
    println!("  Course purchases:  {}", courses.all().len());
    println!("  Book purchases:    {}", books.all().len());
    println!("  Completed courses: {}", tracker.completed_count());
    let badges = tracker.badge_state();
    println!(
        "  Badges:            beginner {}  intermediate {}",
        if badges.beginner_badge { "yes" } else { "no" },
        if badges.intermediate_badge { "yes" } else { "no" },
    );
    println!();
    Ok(())
}

async fn cmd_demo() -> Result<()> {
    let dir = std::env::temp_dir().join(format!("minerva-demo-{}", std::process::id()));
    let store = ProfileStore::open(&dir)?;
    let catalog = Catalog::builtin();

    println!("\n  MINERVA DEMO - account-scoped unlock walk-through");
    println!("  =================================================\n");

    let wallet = Arc::new(SimulatedWallet::new(vec!["0xAAA".into(), "0xBBB".into()]));
    let session = Arc::new(WalletSession::new(Some(wallet.clone())));
    let engine = PurchaseEngine::new(
        session.clone(),
        PurchaseLedger::open(store.clone(), LedgerKind::Courses),
    );

    let course = catalog
        .course_by_id("exploring-history")
        .expect("demo course in builtin catalog");
    let listing = Listing::from(course);

    println!("  1. Buying \"{}\" as 0xAAA...", course.title);
    match engine.buy(&listing).await {
        Outcome::Unlocked { transaction_hash } => {
            println!("     Sent {} ETH, tx {}", listing.price_eth, eth::shorten(&transaction_hash));
        }
        other => println!("     Unexpected outcome: {:?}", other),
    }
    println!("     Unlocked for 0xAAA: {}", engine.is_unlocked(&listing));

    println!("  2. Switching to 0xBBB (accountsChanged)...");
    engine.handle_event(&WalletEvent::AccountsChanged(vec!["0xBBB".into(), "0xAAA".into()]));
    println!("     Unlocked for 0xBBB: {}", engine.is_unlocked(&listing));

    println!("  3. Switching back to 0xAAA...");
    engine.handle_event(&WalletEvent::AccountsChanged(vec!["0xAAA".into(), "0xBBB".into()]));
    println!("     Unlocked for 0xAAA: {}", engine.is_unlocked(&listing));

    println!("  4. Declining a signature for \"AI Mastery\"...");
    wallet.set_behavior(SignerBehavior::RejectPayment);
    let ai = Listing::from(catalog.course_by_id("ai-mastery").expect("demo course"));
    if let Outcome::Cancelled(notice) = engine.buy(&ai).await {
        print_notice(&notice);
    }
    println!("     Unlocked after decline: {}", engine.is_unlocked(&ai));

    std::fs::remove_dir_all(&dir).ok();
    println!("\n  Demo finished.\n");
    Ok(())
}
