use crate::db::pool::DbPool;
use crate::utils::colors::{CYAN, GREEN, GREY, RESET, YELLOW};
use rusqlite::OptionalExtension;
use std::fs;

pub fn print_db_info(pool: &mut DbPool, db_path: &str) -> rusqlite::Result<()> {
    println!();

    //
    // 1) FILE SIZE
    //
    let file_size = fs::metadata(db_path).map(|m| m.len()).unwrap_or(0);
    let file_mb = (file_size as f64) / (1024.0 * 1024.0);

    println!("{}• File:{} {}{}{}", CYAN, RESET, YELLOW, db_path, RESET);
    println!("{}• Size:{} {:.2} MB", CYAN, RESET, file_mb);

    //
    // 2) TOTAL LIGHTS
    //
    let count: i64 = pool
        .conn
        .query_row("SELECT COUNT(*) FROM luminarias", [], |row| row.get(0))?;
    println!(
        "{}• Total luminarias:{} {}{}{}",
        CYAN, RESET, GREEN, count, RESET
    );

    //
    // 3) PER-STATUS BREAKDOWN
    //
    println!("{}• By status:{}", CYAN, RESET);
    for status in ["ok", "reported", "confirmed", "fixed"] {
        let n: i64 = pool.conn.query_row(
            "SELECT COUNT(*) FROM luminarias WHERE status = ?1",
            [status],
            |row| row.get(0),
        )?;
        println!("    {:<10} {}", status, n);
    }

    //
    // 4) OLDEST OPEN REPORT
    //
    let oldest: Option<String> = pool
        .conn
        .query_row(
            "SELECT report_date FROM luminarias
             WHERE status IN ('reported','confirmed') AND report_date IS NOT NULL
             ORDER BY report_date ASC LIMIT 1",
            [],
            |row| row.get(0),
        )
        .optional()?;

    let fmt_oldest = oldest.unwrap_or_else(|| format!("{GREY}--{RESET}"));
    println!("{}• Oldest open report:{} {}", CYAN, RESET, fmt_oldest);

    //
    // 5) CUMULATIVE DOWNTIME
    //
    let total_downtime: f64 = pool
        .conn
        .query_row(
            "SELECT IFNULL(SUM(downtime), 0) FROM luminarias",
            [],
            |row| row.get(0),
        )?;
    println!(
        "{}• Cumulative downtime:{} {:.2} h",
        CYAN, RESET, total_downtime
    );

    println!();
    Ok(())
}
