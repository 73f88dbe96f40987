#![no_main]

use libfuzzer_sys::fuzz_target;
use ocb::model::Chromatogram;
use ocb::progress::NullProgressMonitor;
use ocb::reader::{ChromatogramReader, ReaderConfig};
use std::io::Cursor;
use zip::ZipArchive;

fuzz_target!(|data: &[u8]| {
    // Anything may fail to parse; nothing may panic
    let Ok(mut archive) = ZipArchive::new(Cursor::new(data)) else {
        return;
    };

    for config in [ReaderConfig::default(), ReaderConfig::strict()] {
        let reader = ChromatogramReader::with_config(config);
        let _ = reader.read_archive::<_, Chromatogram>(&mut archive, "", None, &mut NullProgressMonitor);
    }
});
