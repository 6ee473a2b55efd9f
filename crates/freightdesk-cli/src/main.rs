//! Freightdesk CLI - command-line client for the Freightdesk backend.
//!
//! Set FREIGHTDESK_API_URL (and optionally FREIGHTDESK_CREDENTIALS_PATH).
//! `login` stores a token pair plus a cached user in the credentials file;
//! every other command reuses it, refreshing automatically on expiry.

use anyhow::Context;
use clap::{Parser, Subcommand};
use serde::Serialize;
use uuid::Uuid;

use freightdesk_api_client::{ApiClient, SignupRequest, UpdateProfileRequest};
use freightdesk_cli::{init_tracing, render_field_errors};
use freightdesk_core::date_mask::display_masked_date;
use freightdesk_core::models::{BookingDraft, ClearanceDraft};
use freightdesk_core::{format_date_input, AppError, ClientConfig, VEHICLE_TYPES};

#[derive(Parser)]
#[command(name = "freightdesk", about = "Freightdesk booking and clearance CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create an account
    Signup {
        name: String,
        email: String,
        #[arg(long)]
        phone: Option<String>,
        /// Password (prompted-for flows are out of scope; pass directly)
        password: String,
    },
    /// Log in and store the session
    Login { email: String, password: String },
    /// Drop the stored session
    Logout,
    /// Show the signed-in user
    Whoami,
    /// Verify an email address with the token from the verification mail
    VerifyEmail { token: String },
    /// Resend the verification mail
    ResendVerification,
    /// Request a password-reset mail
    ForgotPassword { email: String },
    /// Set a new password with the token from the reset mail
    ResetPassword { token: String, password: String },
    /// Profile operations
    Profile {
        #[command(subcommand)]
        sub: ProfileCommands,
    },
    /// List the bookable vehicle catalog
    Vehicles,
    /// Book a truck (or edit an existing booking with --edit)
    Book {
        #[arg(long)]
        vehicle: String,
        /// Free-text vehicle name when --vehicle is "other"
        #[arg(long)]
        custom_vehicle: Option<String>,
        #[arg(long)]
        cargo_type: String,
        #[arg(long)]
        pickup: String,
        #[arg(long)]
        drop: String,
        /// Cargo weight in kilograms
        #[arg(long)]
        weight: String,
        #[arg(long)]
        size: String,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        budget: String,
        #[arg(long, default_value = "1")]
        containers: String,
        #[arg(long)]
        insurance: bool,
        #[arg(long)]
        sales_tax: bool,
        /// 11-digit clearing agent license number
        #[arg(long)]
        agent: Option<String>,
        /// DD/MM/YYYY (free-form input is normalized through the date mask)
        #[arg(long)]
        booking_date: String,
        /// DD/MM/YYYY
        #[arg(long)]
        delivery_date: String,
        /// Shipment id to edit instead of creating a new booking
        #[arg(long)]
        edit: Option<Uuid>,
    },
    /// Shipment operations
    Shipments {
        #[command(subcommand)]
        sub: ShipmentCommands,
    },
    /// Show the current position of an in-transit shipment
    Track { id: Uuid },
    /// Clearance request operations
    Clearance {
        #[command(subcommand)]
        sub: ClearanceCommands,
    },
}

#[derive(Subcommand)]
enum ProfileCommands {
    /// Update name and/or phone
    Update {
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        phone: Option<String>,
    },
    /// Delete the account (irreversible)
    Delete {
        /// Confirm deletion
        #[arg(long)]
        yes: bool,
    },
}

#[derive(Subcommand)]
enum ShipmentCommands {
    /// List my shipments, optionally filtered by status
    List {
        #[arg(long)]
        status: Option<String>,
    },
    /// Get one shipment
    Get { id: Uuid },
    /// Cancel a pending shipment
    Cancel { id: Uuid },
    /// Confirm an operator-adjusted shipment
    Confirm { id: Uuid },
    /// Propose an alternate budget for a pending booking
    Discount { id: Uuid, budget: f64 },
}

#[derive(Subcommand)]
enum ClearanceCommands {
    /// List my clearance requests
    List,
    /// Get one clearance request
    Get { id: Uuid },
    /// Submit a clearance request from a JSON draft file.
    /// Document entries in the draft are local file paths.
    Create { draft: std::path::PathBuf },
}

fn print_json(value: &impl Serialize) -> anyhow::Result<()> {
    let out = serde_json::to_string_pretty(value).context("Serialize response")?;
    println!("{}", out);
    Ok(())
}

async fn run(client: &ApiClient, command: Commands) -> anyhow::Result<()> {
    match command {
        Commands::Signup {
            name,
            email,
            phone,
            password,
        } => {
            let session = client
                .signup(&SignupRequest {
                    name,
                    email,
                    phone,
                    password,
                })
                .await?;
            print_json(&session.user)?;
        }
        Commands::Login { email, password } => {
            let session = client.login(&email, &password).await?;
            print_json(&session.user)?;
        }
        Commands::Logout => {
            client.logout()?;
            println!("Logged out");
        }
        Commands::Whoami => {
            let user = client.me().await?;
            print_json(&user)?;
        }
        Commands::VerifyEmail { token } => {
            let response = client.verify_email(&token).await?;
            println!("{}", response.message.as_deref().unwrap_or("Email verified"));
        }
        Commands::ResendVerification => {
            let response = client.resend_verification().await?;
            println!(
                "{}",
                response.message.as_deref().unwrap_or("Verification mail sent")
            );
        }
        Commands::ForgotPassword { email } => {
            let response = client.forgot_password(&email).await?;
            println!("{}", response.message.as_deref().unwrap_or("Reset mail sent"));
        }
        Commands::ResetPassword { token, password } => {
            let response = client.reset_password(&token, &password).await?;
            println!("{}", response.message.as_deref().unwrap_or("Password reset"));
        }
        Commands::Profile { sub } => match sub {
            ProfileCommands::Update { name, phone } => {
                let user = client
                    .update_me(&UpdateProfileRequest { name, phone })
                    .await?;
                print_json(&user)?;
            }
            ProfileCommands::Delete { yes } => {
                if !yes {
                    anyhow::bail!("Refusing to delete the account without --yes");
                }
                client.delete_me().await?;
                println!("Account deleted");
            }
        },
        Commands::Vehicles => {
            print_json(&VEHICLE_TYPES)?;
        }
        Commands::Book {
            vehicle,
            custom_vehicle,
            cargo_type,
            pickup,
            drop,
            weight,
            size,
            description,
            budget,
            containers,
            insurance,
            sales_tax,
            agent,
            booking_date,
            delivery_date,
            edit,
        } => {
            let draft = BookingDraft {
                vehicle_type: vehicle,
                custom_vehicle_type: custom_vehicle,
                cargo_type,
                pickup_location: pickup,
                drop_location: drop,
                cargo_weight: weight,
                cargo_size: size,
                description,
                budget,
                num_containers: containers,
                insurance,
                sales_tax,
                clearing_agent_num: agent,
                booking_date: format_date_input(&booking_date),
                delivery_date: format_date_input(&delivery_date),
            };
            tracing::debug!(
                booking_date = %display_masked_date(&draft.booking_date),
                delivery_date = %display_masked_date(&draft.delivery_date),
                "normalized booking dates"
            );
            let shipment = client.submit_booking(&draft, edit).await?;
            print_json(&shipment)?;
        }
        Commands::Shipments { sub } => match sub {
            ShipmentCommands::List { status } => {
                let shipments = client.list_my_shipments(status.as_deref()).await?;
                print_json(&shipments)?;
            }
            ShipmentCommands::Get { id } => {
                let shipment = client.get_shipment(id).await?;
                print_json(&shipment)?;
            }
            ShipmentCommands::Cancel { id } => {
                let shipment = client.cancel_shipment(id).await?;
                print_json(&shipment)?;
            }
            ShipmentCommands::Confirm { id } => {
                let shipment = client.confirm_shipment(id).await?;
                print_json(&shipment)?;
            }
            ShipmentCommands::Discount { id, budget } => {
                let shipment = client.request_discount(id, budget).await?;
                print_json(&shipment)?;
            }
        },
        Commands::Track { id } => {
            let location = client.current_location(id).await?;
            print_json(&location)?;
        }
        Commands::Clearance { sub } => match sub {
            ClearanceCommands::List => {
                let requests = client.list_clearance_requests().await?;
                print_json(&requests)?;
            }
            ClearanceCommands::Get { id } => {
                let request = client.get_clearance_request(id).await?;
                print_json(&request)?;
            }
            ClearanceCommands::Create { draft } => {
                let raw = std::fs::read_to_string(&draft)
                    .with_context(|| format!("Failed to read draft file: {}", draft.display()))?;
                let draft: ClearanceDraft = serde_json::from_str(&raw)
                    .context("Malformed clearance draft (see `clearance create --help`)")?;
                let request = client.submit_clearance(&draft).await?;
                print_json(&request)?;
            }
        },
    }
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    let config = ClientConfig::from_env()?;
    let client = ApiClient::from_config(&config)
        .context("Failed to create API client. Set FREIGHTDESK_API_URL")?;

    let cli = Cli::parse();

    if let Err(err) = run(&client, cli.command).await {
        if let Some(fields) = err
            .downcast_ref::<AppError>()
            .and_then(AppError::field_errors)
        {
            eprintln!("Please fix the following fields:");
            eprintln!("{}", render_field_errors(fields));
            std::process::exit(1);
        }
        return Err(err);
    }
    Ok(())
}
