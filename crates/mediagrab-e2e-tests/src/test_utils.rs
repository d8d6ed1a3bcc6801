use eyre::Result;
use std::path::PathBuf;
use tempfile::TempDir;

/// Writes a CSV export into a fresh temp directory and returns both; the
/// directory must outlive the test.
pub fn write_input_csv(contents: &str) -> Result<(TempDir, PathBuf)> {
    let temp_dir = tempfile::tempdir()?;
    let csv_path = temp_dir.path().join("posts.csv");
    std::fs::write(&csv_path, contents)?;
    Ok((temp_dir, csv_path))
}

/// CSV with one image column and one video column, with the given cell
/// values per row (empty string leaves the cell blank).
pub fn media_csv(rows: &[(&str, &str)]) -> String {
    let mut out = String::from("caption,displayUrl,videoUrl\n");
    for (idx, (image_url, video_url)) in rows.iter().enumerate() {
        out.push_str(&format!("post {idx},{image_url},{video_url}\n"));
    }
    out
}
