#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(s) = std::str::from_utf8(data) else { return };

    // Whatever parses must be in range; nothing may panic.
    if let Ok(requests) = fracdraw_requests::parse_requests(s) {
        for r in &requests {
            assert!(fracdraw_types::bounds::depth_in_range(r.depth));
        }
        assert!(requests.len() <= s.lines().count());
    }
});
