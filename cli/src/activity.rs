use clap::Parser;
use lifelink_activity::factory;
use lifelink_activity::filter::ActivityFilter;
use lifelink_activity::log::ActivityLog;
use lifelink_activity::log::DEFAULT_RECENT_LIMIT;
use std::path::Path;
use std::path::PathBuf;

/// CLI for the local activity log.
#[derive(Debug, Parser)]
pub struct ActivityCli {
    #[command(subcommand)]
    pub cmd: ActivityCommand,
}

/// Activity subcommands.
#[derive(Debug, clap::Subcommand)]
pub enum ActivityCommand {
    /// Record a booked donation appointment.
    RecordAppointment {
        #[arg(long)]
        appointment_id: String,
        /// Appointment date, e.g. 2025-07-01.
        #[arg(long)]
        date: String,
        #[arg(long)]
        location: String,
        #[arg(long)]
        user: Option<String>,
    },
    /// Record a created campaign.
    RecordCampaign {
        #[arg(long)]
        campaign_id: String,
        #[arg(long)]
        name: String,
        #[arg(long)]
        user: Option<String>,
    },
    /// Record joining a campaign.
    RecordJoined {
        #[arg(long)]
        campaign_id: String,
        #[arg(long)]
        name: String,
        #[arg(long)]
        user: Option<String>,
    },
    /// Record a completed donation.
    RecordDonation {
        #[arg(long)]
        location: String,
        /// Donated volume in millilitres.
        #[arg(long)]
        volume: u32,
        #[arg(long)]
        user: Option<String>,
    },
    /// Record a profile update.
    RecordProfile {
        /// Changed field, repeatable.
        #[arg(long = "field")]
        fields: Vec<String>,
        #[arg(long)]
        user: Option<String>,
    },
    /// List records newest first, one JSON object per line.
    List {
        /// Filter by kind, e.g. campaign_joined.
        #[arg(long)]
        kind: Option<String>,
        /// today, week, month or all.
        #[arg(long, default_value = "all")]
        range: String,
        #[arg(long)]
        user: Option<String>,
        /// Case-insensitive substring over title and description.
        #[arg(long)]
        search: Option<String>,
    },
    /// Show the most recent records from the last week.
    Recent {
        #[arg(long, default_value_t = DEFAULT_RECENT_LIMIT)]
        limit: usize,
    },
    /// Show aggregate statistics as JSON.
    Stats,
    /// Delete the whole collection.
    Clear,
    /// Migrate a file-backend collection into a SQLite database.
    Migrate {
        /// Directory holding activity.json
        #[arg(long)]
        dir: PathBuf,
        /// Destination SQLite database file
        #[arg(long)]
        db: PathBuf,
    },
}

/// Execute the activity command.
pub fn run(root: &Path, cli: ActivityCli) -> anyhow::Result<()> {
    match cli.cmd {
        ActivityCommand::Migrate { dir, db } => {
            let n = lifelink_activity::migrate::migrate_file_to_sqlite(&dir, &db)?;
            println!("Migrated {n} records");
        }
        cmd => {
            let store = factory::open_store(root, None)?;
            let log = ActivityLog::new(store);
            match cmd {
                ActivityCommand::RecordAppointment {
                    appointment_id,
                    date,
                    location,
                    user,
                } => {
                    log.record_appointment_created(
                        &appointment_id,
                        &date,
                        &location,
                        user.as_deref(),
                    );
                }
                ActivityCommand::RecordCampaign {
                    campaign_id,
                    name,
                    user,
                } => {
                    log.record_campaign_created(&campaign_id, &name, user.as_deref());
                }
                ActivityCommand::RecordJoined {
                    campaign_id,
                    name,
                    user,
                } => {
                    log.record_campaign_joined(&campaign_id, &name, user.as_deref());
                }
                ActivityCommand::RecordDonation {
                    location,
                    volume,
                    user,
                } => {
                    log.record_donation_completed(&location, volume, user.as_deref());
                }
                ActivityCommand::RecordProfile { fields, user } => {
                    log.record_profile_updated(&fields, user.as_deref());
                }
                ActivityCommand::List {
                    kind,
                    range,
                    user,
                    search,
                } => {
                    let filter = ActivityFilter {
                        kind: match kind {
                            Some(s) => Some(s.parse()?),
                            None => None,
                        },
                        date_range: range.parse()?,
                        user_id: user,
                        search,
                    };
                    for record in log.get_activities(&filter) {
                        println!("{}", serde_json::to_string(&record)?);
                    }
                }
                ActivityCommand::Recent { limit } => {
                    for record in log.get_recent_activities(limit) {
                        println!("{}", serde_json::to_string(&record)?);
                    }
                }
                ActivityCommand::Stats => {
                    println!("{}", serde_json::to_string(&log.stats())?);
                }
                ActivityCommand::Clear => {
                    log.clear();
                }
                ActivityCommand::Migrate { .. } => unreachable!(),
            }
        }
    }
    Ok(())
}
