//! Socket framing codes (5000–5999).

error_codes! {
    table SOCKET_ENTRIES;

    ERR_SOCK_ZERO_RECV_LENGTH = 5000 => "Received zero length message",
    ERR_SOCK_NEGATIVE_RECV_LENGTH = 5001 => "Received message length < 0",
    ERR_SOCK_PARTIAL_SEND = 5002 => "Failed to send entire message",
    ERR_SOCK_INCOMPLETE_PACKET = 5003 => "Header lengths are longer than data received",
    ERR_SOCK_TIMEOUT = 5004 => "Socket timed out on send/recv operation",
    ERR_SOCK_ZERO_BYTES_SENT = 5005 => "Zero Bytes were transmitted or received",
}
