pub mod test_helpers {
    use filetime::FileTime;
    use std::fs;
    use std::path::Path;
    use std::time::{Duration, SystemTime};

    const SECONDS_PER_DAY: u64 = 24 * 60 * 60;

    /// Writes a small file and back-dates its last-write time by whole
    /// days, so age filters see it as `days_old` days old.
    pub fn write_aged_file(path: &Path, days_old: u64) {
        fs::write(path, b"sweep test data").expect("Failed to write test file");

        let mtime = SystemTime::now() - Duration::from_secs(days_old * SECONDS_PER_DAY);
        filetime::set_file_mtime(path, FileTime::from_system_time(mtime))
            .expect("Failed to set test file mtime");
    }
}
