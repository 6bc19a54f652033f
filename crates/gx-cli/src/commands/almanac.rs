use colored::Colorize;
use comfy_table::{ContentArrangement, Table};
use gx_almanac::{AlmanacInfo, AlmanacProvider, ChineseCalendar};
use gx_oracle::guidance::DANGER_WARNING;

pub fn run(date: Option<&str>, json: bool) -> Result<(), String> {
    let at = super::resolve_time(date)?;
    let info = ChineseCalendar
        .lunar_almanac(at)
        .map_err(|e| e.to_string())?;

    if json {
        let out = serde_json::to_string_pretty(&info).map_err(|e| e.to_string())?;
        println!("{out}");
        return Ok(());
    }

    print_almanac(&info);
    Ok(())
}

/// Render an almanac record as a two-column table.
pub fn print_almanac(info: &AlmanacInfo) {
    let leap = if info.leap_month { "是" } else { "否" };
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["项", "值"]);
    table.add_row(vec!["农历", info.lunar_str.as_str()]);
    table.add_row(vec!["闰月", leap]);
    table.add_row(vec!["日干支", info.day_gan_zhi.as_str()]);
    table.add_row(vec!["时辰", info.time_branch.as_str()]);
    table.add_row(vec!["值日", info.zhi_xing.as_str()]);
    table.add_row(vec!["冲", info.chong.as_str()]);
    table.add_row(vec!["煞", info.sha.as_str()]);
    let yi = info.yi.join(" ");
    let ji = info.ji.join(" ");
    table.add_row(vec!["宜", yi.as_str()]);
    table.add_row(vec!["忌", ji.as_str()]);
    if !info.shen_sha.is_empty() {
        let gods = info.shen_sha.join(" ");
        table.add_row(vec!["神煞", gods.as_str()]);
    }

    println!("{table}");
    if info.is_dangerous_day() {
        println!("  {}", DANGER_WARNING.red().bold());
    }
}
