
use bytes::Bytes;
use shared::error::Result;

/// Payloader payloads a byte array for use as RTP packet payloads
pub trait Payloader {
    /// Splits one encoded media unit into payloads, each no larger than `mtu`
    /// bytes. An empty input yields no payloads.
    ///
    /// Metadata may be stored on the Payloader itself.
    fn payload(&mut self, mtu: usize, b: &Bytes) -> Result<Vec<Bytes>>;
}

/// Depacketizer depacketizes a RTP payload, removing any RTP specific data from the payload
pub trait Depacketizer {
    /// Parses the RTP payload and returns the media contained inside it.
    ///
    /// Metadata may be stored on the Depacketizer itself; the input buffer is
    /// never held onto across calls.
    fn depacketize(&mut self, b: &Bytes) -> Result<Bytes>;

    /// Checks if the packet is at the beginning of a partition.  This
    /// should return false if the result could not be determined, in
    /// which case the caller will detect timestamp discontinuities.
    fn is_partition_head(&self, payload: &Bytes) -> bool;

    /// Checks if the packet is at the end of a partition.  This should
    /// return false if the result could not be determined.
    fn is_partition_tail(&self, marker: bool, payload: &Bytes) -> bool;
}
