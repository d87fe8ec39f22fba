// crates/shared-kernel/tests/bytesize_human.rs
use keyspace_analysis_shared_kernel::ByteSize;

#[test]
fn human_boundaries() {
    assert_eq!(ByteSize::from(0).to_scaled().to_string(), "0.000 Bytes");
    assert_eq!(ByteSize::from(1536).to_scaled().to_string(), "1.500 KB");
    assert_eq!(ByteSize::from(1024 * 1024).to_scaled().to_string(), "1.000 MB");
    assert_eq!(ByteSize::from(1_073_741_824).to_scaled().to_string(), "1.000 GB");
}
