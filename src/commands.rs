//! Command handlers
//!
//! Each handler validates its arguments, performs one API call, logs the
//! remaining rate limit and renders the result as a table.

use crate::cli::{
    BeerCommand, BreweryCommand, CheckinRange, Commands, LocalCommand, UserCommand, VenueCommand,
};
use crate::client::{ApiResponse, Client};
use crate::config::RATE_LIMIT_HEADER;
use crate::error::{Error, Result};
use crate::logger::Logger;
use crate::model::Checkin;
use crate::output;
use std::io::Write;
use std::slice;

/// Run a parsed command, writing tables to `out` and diagnostics to `log`
///
/// # Errors
///
/// Argument and sort errors are returned before any request is made. API,
/// transport and output errors are returned as they happen; a failed call
/// writes nothing to `out`.
pub fn execute<W: Write, L: Write>(
    client: &Client,
    command: Commands,
    out: &mut W,
    log: &mut Logger<L>,
) -> Result<()> {
    match command {
        Commands::User { command } => user(client, command, out, log),
        Commands::Beer { command } => beer(client, command, out, log),
        Commands::Brewery { command } => brewery(client, command, out, log),
        Commands::Venue { command } => venue(client, command, out, log),
        Commands::Local { command } => local(client, command, out, log),
    }
}

fn user<W: Write, L: Write>(
    client: &Client,
    command: UserCommand,
    out: &mut W,
    log: &mut Logger<L>,
) -> Result<()> {
    let users = client.user();

    match command {
        UserCommand::Info { username, info } => {
            let username = must_string_arg(&username, "username")?;
            let (user, res) = users.info(username, !info)?;
            log_rate_limit(log, &res);
            output::print_users(out, slice::from_ref(&user), info)
        }
        UserCommand::Friends { username, page } => {
            let username = must_string_arg(&username, "username")?;
            let (friends, res) = users.friends_offset_limit(username, page.offset, page.limit)?;
            log_rate_limit(log, &res);
            output::print_users(out, &friends, false)
        }
        UserCommand::Badges { username, page } => {
            let username = must_string_arg(&username, "username")?;
            let (badges, res) = users.badges_offset_limit(username, page.offset, page.limit)?;
            log_rate_limit(log, &res);
            output::print_badges(out, &badges)
        }
        UserCommand::Beers { username, page } => {
            let username = must_string_arg(&username, "username")?;
            let (offset, limit, sort) = page.resolve()?;
            let (beers, res) = users.beers_offset_limit_sort(username, offset, limit, sort)?;
            log_rate_limit(log, &res);
            output::print_beers(out, &beers)
        }
        UserCommand::Wishlist { username, page } => {
            let username = must_string_arg(&username, "username")?;
            let (offset, limit, sort) = page.resolve()?;
            let (beers, res) = users.wish_list_offset_limit_sort(username, offset, limit, sort)?;
            log_rate_limit(log, &res);
            output::print_beers(out, &beers)
        }
        UserCommand::Checkins { username, range } => {
            let username = must_string_arg(&username, "username")?;
            let result = paged(range, || users.checkins(username), |min_id, max_id, limit| {
                users.checkins_min_max_id_limit(username, min_id, max_id, limit)
            });
            print_checkins(out, log, result)
        }
    }
}

fn beer<W: Write, L: Write>(
    client: &Client,
    command: BeerCommand,
    out: &mut W,
    log: &mut Logger<L>,
) -> Result<()> {
    let beers = client.beer();

    match command {
        BeerCommand::Info { id } => {
            let (beer, res) = beers.info(id, true)?;
            log_rate_limit(log, &res);
            output::print_beers(out, slice::from_ref(&beer))
        }
        BeerCommand::Checkins { id, range } => {
            let result = paged(range, || beers.checkins(id), |min_id, max_id, limit| {
                beers.checkins_min_max_id_limit(id, min_id, max_id, limit)
            });
            print_checkins(out, log, result)
        }
        BeerCommand::Search { query, page } => {
            let query = must_string_arg(&query, "query")?;
            let (offset, limit, sort) = page.resolve()?;
            let (found, res) = beers.search_offset_limit_sort(query, offset, limit, sort)?;
            log_rate_limit(log, &res);
            output::print_beers(out, &found)
        }
    }
}

fn brewery<W: Write, L: Write>(
    client: &Client,
    command: BreweryCommand,
    out: &mut W,
    log: &mut Logger<L>,
) -> Result<()> {
    let breweries = client.brewery();

    match command {
        BreweryCommand::Info { id } => {
            let (brewery, res) = breweries.info(id, true)?;
            log_rate_limit(log, &res);
            output::print_breweries(out, slice::from_ref(&brewery))
        }
        BreweryCommand::Checkins { id, range } => {
            let result = paged(range, || breweries.checkins(id), |min_id, max_id, limit| {
                breweries.checkins_min_max_id_limit(id, min_id, max_id, limit)
            });
            print_checkins(out, log, result)
        }
        BreweryCommand::Search { query, page } => {
            let query = must_string_arg(&query, "query")?;
            let (found, res) = breweries.search_offset_limit(query, page.offset, page.limit)?;
            log_rate_limit(log, &res);
            output::print_breweries(out, &found)
        }
    }
}

fn venue<W: Write, L: Write>(
    client: &Client,
    command: VenueCommand,
    out: &mut W,
    log: &mut Logger<L>,
) -> Result<()> {
    let venues = client.venue();

    match command {
        VenueCommand::Info { id } => {
            let (venue, res) = venues.info(id, true)?;
            log_rate_limit(log, &res);
            output::print_venues(out, slice::from_ref(&venue))
        }
        VenueCommand::Checkins { id, range } => {
            let result = paged(range, || venues.checkins(id), |min_id, max_id, limit| {
                venues.checkins_min_max_id_limit(id, min_id, max_id, limit)
            });
            print_checkins(out, log, result)
        }
    }
}

fn local<W: Write, L: Write>(
    client: &Client,
    command: LocalCommand,
    out: &mut W,
    log: &mut Logger<L>,
) -> Result<()> {
    let nearby = client.local();

    match command {
        LocalCommand::Checkins {
            lat,
            lng,
            radius,
            range,
        } => {
            let result = if range.is_default() && radius.is_none() {
                nearby.checkins(lat, lng)
            } else {
                let (min_id, max_id, limit) = range.bounds();
                nearby.checkins_min_max_id_limit_radius(lat, lng, min_id, max_id, limit, radius)
            };
            print_checkins(out, log, result)
        }
    }
}

/// Call `first` when no paging flag was given, otherwise `page` with defaults filled in
fn paged<F, P>(range: CheckinRange, first: F, page: P) -> Result<(Vec<Checkin>, ApiResponse)>
where
    F: FnOnce() -> Result<(Vec<Checkin>, ApiResponse)>,
    P: FnOnce(u64, u64, u32) -> Result<(Vec<Checkin>, ApiResponse)>,
{
    if range.is_default() {
        first()
    } else {
        let (min_id, max_id, limit) = range.bounds();
        page(min_id, max_id, limit)
    }
}

fn print_checkins<W: Write, L: Write>(
    out: &mut W,
    log: &mut Logger<L>,
    result: Result<(Vec<Checkin>, ApiResponse)>,
) -> Result<()> {
    let (checkins, res) = result?;
    log_rate_limit(log, &res);
    output::print_checkins(out, &checkins)
}

/// Reject a required string argument that is empty or only whitespace
///
/// # Errors
///
/// Returns [`Error::MissingArgument`] naming `name`.
pub fn must_string_arg<'a>(value: &'a str, name: &str) -> Result<&'a str> {
    if value.trim().is_empty() {
        return Err(Error::MissingArgument(name.to_string()));
    }
    Ok(value)
}

/// Log the remaining rate limit, when the server reported one
pub fn log_rate_limit<L: Write>(log: &mut Logger<L>, res: &ApiResponse) {
    if let Some(remaining) = res.rate_limit_remaining() {
        log.info(format_args!("{RATE_LIMIT_HEADER}: {remaining}"));
    }
}
