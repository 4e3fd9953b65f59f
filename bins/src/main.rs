use std::sync::Arc;

use ai::{Ai, AiModel, GutAssistant};
use chrono::{NaiveDate, Weekday};
use journal::{service::statistics::MonthDashboard, Journal};
use log::info;
use model::user::UserProfile;
use time::MonthKey;

const WEEKDAY_LABELS: [&str; 7] = ["일", "월", "화", "수", "목", "금", "토"];

fn fmt_weekday(weekday: Weekday) -> &'static str {
    WEEKDAY_LABELS[weekday.num_days_from_sunday() as usize]
}

#[tokio::main]
async fn main() -> eyre::Result<()> {
    let env = env::Env::load()?;
    pretty_env_logger::formatted_builder()
        .parse_filters(env.rust_log())
        .init();
    color_eyre::install()?;

    let ai_client: Option<Arc<dyn GutAssistant>> = env.ai().map(|(base_url, api_key)| {
        Arc::new(Ai::new(
            base_url.to_string(),
            api_key.to_string(),
            AiModel::ClaudeSonnet,
        )) as Arc<dyn GutAssistant>
    });

    let mut profile = UserProfile::new("게스트");
    profile.onboarded = true;
    let journal = Journal::new(profile, ai_client);
    journal.records.seed_demo();
    info!("Journal seeded with {} demo records", journal.records.count());

    // the demo data lives in May 2025
    let today = NaiveDate::from_ymd_opt(2025, 5, 14).unwrap();
    let month = MonthKey::from_date(today);

    print_dashboard(&journal.statistics.month_dashboard(month));
    print_trend(&journal, today);

    if journal.has_assistant() {
        let reply = journal.assistant()?.chat("오늘 속이 더부룩해요. 뭘 먹는 게 좋을까요?").await;
        info!("GutBuddy: {}", reply);
    } else {
        info!("AI_BASE_URL/AI_API_KEY not set, assistant disabled");
    }

    Ok(())
}

fn print_dashboard(dashboard: &MonthDashboard) {
    let stats = &dashboard.stats;
    info!(
        "{}: 기록 {}일, 평균 {}%, 좋음 {} / 보통 {} / 나쁨 {}, 배변 {}회",
        dashboard.month, stats.total, stats.average, stats.good, stats.okay, stats.bad, stats.stool_total
    );
    info!("{}", dashboard.tier.message());

    println!("   {}", WEEKDAY_LABELS.join("  "));
    for row in dashboard.grid.chunks(7) {
        let line: Vec<String> = row
            .iter()
            .map(|cell| match cell {
                Some(day) => format!("{:2}", day),
                None => "  ".to_string(),
            })
            .collect();
        println!("   {}", line.join("  "));
    }

    for record in &dashboard.records {
        info!(
            "{} {} {}%: {}",
            record.date,
            record.mood.icon(),
            record.score,
            record.memo
        );
    }
}

fn print_trend(journal: &Journal, today: NaiveDate) {
    let trend = journal.statistics.weekly_trend(today);
    for point in &trend.points {
        let icon = point.mood.map(|m| m.icon()).unwrap_or(" ");
        info!("{} {:3}% {}", fmt_weekday(point.weekday), point.score, icon);
    }
}
