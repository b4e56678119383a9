//! Subcommand handlers. Each writes either text or pretty JSON to `out`.

use std::io::{BufRead, Write};

use anyhow::{Context as _, Result, bail};
use astroguide_assistant::{ChatSession, Message, SUGGESTIONS, ThinkingDelay};
use astroguide_chart::{
    BirthInput, ChartResult, DEMO_DISCLAIMER, Kundali, KundaliConfig, SouthIndianChart,
    generate_chart, generate_kundali,
};
use astroguide_config::AppConfig;
use astroguide_muhurta::{ALL_EVENT_KINDS, EventKind, MuhurtaQuery, MuhurtaWindow, top_muhurtas};
use astroguide_time::{
    NaiveDate, epoch_millis_to_jd, format_hours, gmst_hours, jd_to_epoch_millis,
    local_sidereal_time_hours, midnight_epoch_millis, parse_date,
};
use astroguide_vedic_base::dasha::{
    DashaPeriod, starting_lord, vimshottari_hierarchy, vimshottari_snapshot,
};
use astroguide_vedic_base::{
    Graha, deg_to_dms, nakshatra_from_longitude, nakshatra_from_tropical, rashi_from_longitude,
    rashi_from_tropical,
};
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::args::{BirthArgs, Commands};

/// Shared state for one invocation.
pub struct Context {
    pub config: AppConfig,
    pub json: bool,
}

pub fn run<R: BufRead, W: Write>(
    command: Commands,
    ctx: &Context,
    input: &mut R,
    out: &mut W,
) -> Result<()> {
    match command {
        Commands::Chart { birth, kundali } => chart(ctx, &birth, kundali, out),
        Commands::Muhurta {
            from,
            days,
            event,
            limit,
        } => muhurta(ctx, from.as_deref(), days, event.as_deref(), limit, out),
        Commands::Events => events(ctx, out),
        Commands::Ask { query, no_delay } => ask(ctx, &query.join(" "), no_delay, out),
        Commands::Chat { no_delay } => chat(ctx, no_delay, input, out),
        Commands::Rashi { lon, tropical_jd } => {
            let info = match tropical_jd {
                Some(jd) => rashi_from_tropical(lon, jd),
                None => rashi_from_longitude(lon),
            };
            if ctx.json {
                return emit_json(out, &info);
            }
            let dms = info.dms;
            writeln!(
                out,
                "{} ({}) {} - {} deg {} min {:.1} sec ({:.4} deg in rashi)",
                info.rashi.name(),
                info.rashi.western_name(),
                info.rashi.symbol(),
                dms.degrees,
                dms.minutes,
                dms.seconds,
                info.degrees_in_rashi
            )?;
            Ok(())
        }
        Commands::Nakshatra { lon, tropical_jd } => {
            let info = match tropical_jd {
                Some(jd) => nakshatra_from_tropical(lon, jd),
                None => nakshatra_from_longitude(lon),
            };
            if ctx.json {
                return emit_json(out, &info);
            }
            writeln!(
                out,
                "{} (index {}) - Pada {} ({:.4} deg in nakshatra)",
                info.nakshatra.name(),
                info.nakshatra_index,
                info.pada,
                info.degrees_in_nakshatra
            )?;
            Ok(())
        }
        Commands::Dms { deg } => {
            let d = deg_to_dms(deg);
            if ctx.json {
                return emit_json(out, &d);
            }
            writeln!(out, "{} deg {} min {:.2} sec", d.degrees, d.minutes, d.seconds)?;
            Ok(())
        }
        Commands::Sidereal { jd, lng } => {
            let time = SiderealTime {
                jd,
                longitude: lng,
                gmst_hours: gmst_hours(jd),
                lst_hours: local_sidereal_time_hours(jd, lng),
            };
            if ctx.json {
                return emit_json(out, &time);
            }
            writeln!(
                out,
                "GMST {}  LST {} (lng {lng})",
                format_hours(time.gmst_hours),
                format_hours(time.lst_hours)
            )?;
            Ok(())
        }
        Commands::Dasha {
            birth,
            at,
            levels,
            all,
        } => dasha(ctx, &birth, at.as_deref(), levels, all, out),
    }
}

fn emit_json<W: Write, T: Serialize + ?Sized>(out: &mut W, value: &T) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)?;
    Ok(())
}

/// Merge command-line birth details over the `[birth]` section.
pub fn birth_input(args: &BirthArgs, config: &AppConfig) -> Result<BirthInput> {
    let b = &config.birth;
    let input = BirthInput::parse(
        args.date.as_deref().unwrap_or(&b.date),
        args.time.as_deref().unwrap_or(&b.time),
        args.utc_offset.as_deref().unwrap_or(&b.utc_offset),
        args.lat.unwrap_or(b.latitude),
        args.lng.unwrap_or(b.longitude),
    )?;
    Ok(input)
}

fn today_utc() -> NaiveDate {
    Utc::now().date_naive()
}

fn date_or_today(s: Option<&str>) -> Result<NaiveDate> {
    match s {
        Some(s) => Ok(parse_date(s)?),
        None => Ok(today_utc()),
    }
}

/// Calendar date (UTC) of a Julian Date.
fn jd_date(jd: f64) -> String {
    DateTime::from_timestamp_millis(jd_to_epoch_millis(jd))
        .map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_else(|| format!("JD {jd:.2}"))
}

fn levels_to_max(levels: u8) -> Result<u8> {
    if !(1..=3).contains(&levels) {
        bail!("dasha levels must be 1-3, got {levels}");
    }
    Ok(levels - 1)
}

#[derive(Serialize)]
struct SiderealTime {
    jd: f64,
    longitude: f64,
    gmst_hours: f64,
    lst_hours: f64,
}

#[derive(Serialize)]
struct ChartOutput<'a> {
    input: &'a BirthInput,
    place: Option<&'a str>,
    #[serde(flatten)]
    chart: &'a ChartResult,
    disclaimer: &'static str,
}

#[derive(Serialize)]
struct KundaliOutput<'a> {
    input: &'a BirthInput,
    place: Option<&'a str>,
    #[serde(flatten)]
    kundali: &'a Kundali,
    current_dasha: &'a [DashaPeriod],
    disclaimer: &'static str,
}

fn chart<W: Write>(ctx: &Context, args: &BirthArgs, kundali: bool, out: &mut W) -> Result<()> {
    let input = birth_input(args, &ctx.config)?;
    // The configured place label only applies to the configured coordinates.
    let place = (args.lat.is_none() && args.lng.is_none())
        .then_some(ctx.config.birth.place.as_str());

    if !kundali {
        let chart = generate_chart(&input);
        if ctx.json {
            return emit_json(
                out,
                &ChartOutput {
                    input: &input,
                    place,
                    chart: &chart,
                    disclaimer: DEMO_DISCLAIMER,
                },
            );
        }
        write_chart_text(out, &input, place, &chart, None)?;
        writeln!(out, "{}", SouthIndianChart::from_chart(&chart))?;
        writeln!(out, "{DEMO_DISCLAIMER}")?;
        return Ok(());
    }

    let cfg = KundaliConfig {
        aspect_orb: ctx.config.chart.aspect_orb,
        dasha_max_level: ctx.config.chart.dasha_max_level(),
    };
    let k = generate_kundali(&input, &cfg)?;
    let now_jd = epoch_millis_to_jd(Utc::now().timestamp_millis());
    let current = k.dasha_at(now_jd, cfg.dasha_max_level)?;

    if ctx.json {
        return emit_json(
            out,
            &KundaliOutput {
                input: &input,
                place,
                kundali: &k,
                current_dasha: &current.periods,
                disclaimer: DEMO_DISCLAIMER,
            },
        );
    }

    write_chart_text(out, &input, place, &k.chart, Some(&k))?;
    writeln!(out, "{}", SouthIndianChart::from_chart(&k.chart))?;

    writeln!(out, "Aspects (orb {}°):", cfg.aspect_orb)?;
    if k.aspects.is_empty() {
        writeln!(out, "  none")?;
    }
    for a in &k.aspects {
        writeln!(
            out,
            "  {:<8} {:<12} {:<8} {:>5.1}%",
            a.first.name(),
            a.kind.name(),
            a.second.name(),
            a.strength
        )?;
    }
    writeln!(out)?;
    writeln!(out, "Current dasha:")?;
    write_periods(out, &current.periods)?;
    writeln!(out)?;
    writeln!(out, "{DEMO_DISCLAIMER}")?;
    Ok(())
}

fn write_chart_text<W: Write>(
    out: &mut W,
    input: &BirthInput,
    place: Option<&str>,
    chart: &ChartResult,
    kundali: Option<&Kundali>,
) -> Result<()> {
    write!(out, "Birth: {}", input.moment)?;
    if let Some(p) = place {
        write!(out, "  {p}")?;
    }
    writeln!(out, "  ({:.4}, {:.4})", input.latitude, input.longitude)?;
    let asc = &chart.ascendant;
    writeln!(
        out,
        "Ascendant: {} ({}) {}",
        asc.rashi.name(),
        asc.rashi.western_name(),
        asc.degree_label()
    )?;
    writeln!(
        out,
        "Moon sign: {}  Sun sign: {}",
        chart.moon_sign.name(),
        chart.sun_sign.name()
    )?;
    writeln!(out)?;

    write!(out, "{:<10} {:<4} {:<10} {:>6}  {:<18} Pada", "Graha", "", "Rashi", "Deg", "Nakshatra")?;
    if kundali.is_some() {
        write!(out, "  House")?;
    }
    writeln!(out)?;
    for p in &chart.planets {
        write!(
            out,
            "{:<10} {:<4} {:<10} {:>6}  {:<18} {}",
            p.graha.name(),
            p.glyph(),
            p.rashi.name(),
            p.degree_label(),
            p.nakshatra.name(),
            p.pada
        )?;
        if let Some(k) = kundali {
            write!(out, "     {:>2}", k.house_of(p.graha))?;
        }
        writeln!(out)?;
    }
    writeln!(out)?;
    Ok(())
}

fn write_periods<W: Write>(out: &mut W, periods: &[DashaPeriod]) -> Result<()> {
    if periods.is_empty() {
        writeln!(out, "  outside the 120-year cycle")?;
    }
    for p in periods {
        writeln!(
            out,
            "  {:<16} {:<8} {} to {}  ({:.2} y)",
            p.level.name(),
            p.graha.name(),
            jd_date(p.start_jd),
            jd_date(p.end_jd),
            p.duration_years()
        )?;
    }
    Ok(())
}

fn muhurta<W: Write>(
    ctx: &Context,
    from: Option<&str>,
    days: Option<u32>,
    event: Option<&str>,
    limit: Option<usize>,
    out: &mut W,
) -> Result<()> {
    let m = &ctx.config.muhurta;
    let from = date_or_today(from)?;
    let days = days.unwrap_or(m.days);
    let event: EventKind = event.unwrap_or(&m.event).parse()?;
    let limit = limit.unwrap_or(m.limit);

    let query = MuhurtaQuery::new(from, days, event)?;
    let windows = top_muhurtas(&query, limit)?;

    if ctx.json {
        return emit_json(out, &windows);
    }
    writeln!(
        out,
        "{} {} - {} day(s) from {}",
        event.icon(),
        event.label(),
        days,
        from.format("%Y-%m-%d")
    )?;
    writeln!(out)?;
    if windows.is_empty() {
        writeln!(out, "No windows found in this range.")?;
    }
    for w in &windows {
        write_window(out, w)?;
    }
    Ok(())
}

fn write_window<W: Write>(out: &mut W, w: &MuhurtaWindow) -> Result<()> {
    writeln!(out, "{w}  [{}]", w.band().label())?;
    writeln!(
        out,
        "    {} · {} · {} · {} karana",
        w.tithi.name(),
        w.nakshatra.name(),
        w.yoga.name(),
        w.karana.name()
    )?;
    writeln!(
        out,
        "    Rahu Kalam {}  Gulika Kalam {}",
        w.rahu_kalam, w.gulika_kalam
    )?;
    Ok(())
}

#[derive(Serialize)]
struct EventEntry {
    key: &'static str,
    label: &'static str,
    icon: &'static str,
}

fn events<W: Write>(ctx: &Context, out: &mut W) -> Result<()> {
    if ctx.json {
        let list: Vec<EventEntry> = ALL_EVENT_KINDS
            .iter()
            .map(|e| EventEntry {
                key: e.key(),
                label: e.label(),
                icon: e.icon(),
            })
            .collect();
        return emit_json(out, &list);
    }
    for e in ALL_EVENT_KINDS {
        writeln!(out, "{:<11} {} {}", e.key(), e.icon(), e.label())?;
    }
    Ok(())
}

fn thinking_delay(ctx: &Context, no_delay: bool) -> ThinkingDelay {
    if no_delay {
        return ThinkingDelay::none();
    }
    ThinkingDelay {
        base_ms: ctx.config.assistant.think_base_ms,
        jitter_ms: ctx.config.assistant.think_jitter_ms,
    }
}

fn write_message<W: Write>(out: &mut W, m: &Message) -> Result<()> {
    writeln!(out, "{}", m.content)?;
    if !m.citations.is_empty() {
        writeln!(out)?;
        writeln!(out, "Sources:")?;
        for c in &m.citations {
            writeln!(out, "  - {c}")?;
        }
    }
    Ok(())
}

fn ask<W: Write>(ctx: &Context, query: &str, no_delay: bool, out: &mut W) -> Result<()> {
    let mut session = ChatSession::with_delay(thinking_delay(ctx, no_delay));
    let reply = session
        .ask(query)
        .cloned()
        .context("question is empty")?;
    if ctx.json {
        return emit_json(out, &reply);
    }
    write_message(out, &reply)
}

fn chat<R: BufRead, W: Write>(
    ctx: &Context,
    no_delay: bool,
    input: &mut R,
    out: &mut W,
) -> Result<()> {
    let mut session = ChatSession::with_delay(thinking_delay(ctx, no_delay));
    if !ctx.json {
        write_message(out, &session.messages()[0])?;
        writeln!(out)?;
        writeln!(out, "Try asking:")?;
        for s in SUGGESTIONS {
            writeln!(out, "  {s}")?;
        }
        writeln!(out, "Type `exit` or press Ctrl-D to leave.")?;
    }

    let mut line = String::new();
    loop {
        if !ctx.json {
            write!(out, "\n> ")?;
            out.flush()?;
        }
        line.clear();
        if input.read_line(&mut line)? == 0 {
            break;
        }
        let q = line.trim();
        if q.eq_ignore_ascii_case("exit") || q.eq_ignore_ascii_case("quit") {
            break;
        }
        if let Some(reply) = session.ask(q) {
            if !ctx.json {
                writeln!(out)?;
                write_message(out, reply)?;
            }
        }
    }

    log::debug!("chat ended after {} turn(s)", session.turns());
    if ctx.json {
        return emit_json(out, session.messages());
    }
    writeln!(out)?;
    Ok(())
}

#[derive(Serialize)]
struct DashaOutput<'a> {
    moon_nakshatra: &'static str,
    starting_lord: Graha,
    query_date: Option<String>,
    periods: &'a [DashaPeriod],
}

fn dasha<W: Write>(
    ctx: &Context,
    args: &BirthArgs,
    at: Option<&str>,
    levels: Option<u8>,
    all: bool,
    out: &mut W,
) -> Result<()> {
    let input = birth_input(args, &ctx.config)?;
    let chart = generate_chart(&input);
    let moon = chart.planet(Graha::Chandra);
    let max_level = levels_to_max(levels.unwrap_or(ctx.config.chart.dasha_levels))?;

    let (query_date, periods) = if all {
        let h = vimshottari_hierarchy(input.jd(), moon.longitude, 0)?;
        let maha = h.levels.into_iter().next().unwrap_or_default();
        (None, maha)
    } else {
        let date = date_or_today(at)?;
        let jd = epoch_millis_to_jd(midnight_epoch_millis(date));
        let snap = vimshottari_snapshot(input.jd(), moon.longitude, jd, max_level)?;
        (Some(date.format("%Y-%m-%d").to_string()), snap.periods)
    };

    if ctx.json {
        return emit_json(
            out,
            &DashaOutput {
                moon_nakshatra: moon.nakshatra.name(),
                starting_lord: starting_lord(moon.nakshatra_index),
                query_date,
                periods: &periods,
            },
        );
    }

    writeln!(
        out,
        "Moon in {} pada {} (birth {})",
        moon.nakshatra.name(),
        moon.pada,
        input.moment
    )?;
    match &query_date {
        Some(d) => writeln!(out, "Active periods on {d}:")?,
        None => writeln!(out, "Mahadashas:")?,
    }
    write_periods(out, &periods)?;
    Ok(())
}
