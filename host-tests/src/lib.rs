//! Host-based tests for the Breath updater
//! These run the full check -> gate -> flash -> restart flow on the
//! development machine against in-memory flash and a scripted server.
