/*
 * Call Extraction Domain Models
 */

mod call_site;

pub use call_site::CallSite;
