use std::io::Write;

use crate::data_fetcher::models::ContestRecord;

/// Writes one `---` block per contest, in the given order.
///
/// Start and duration are printed as the source delivered them.
pub fn render_listing<W: Write>(out: &mut W, contests: &[ContestRecord]) -> std::io::Result<()> {
    let mut buffer = String::with_capacity(contests.len() * 160);
    for contest in contests {
        buffer.push_str("---\n");
        buffer.push_str(&format!("Site: {}\n", contest.host));
        buffer.push_str(&format!("Contest Name: {}\n", contest.event));
        buffer.push_str(&format!("Start time: {}\n", contest.start_text()));
        buffer.push_str(&format!("Duration: {}\n", contest.duration_text()));
        buffer.push_str(&format!("Contest code: {}\n", contest.id));
    }
    out.write_all(buffer.as_bytes())
}
