//! Interconnect (Quadrics Elan) library codes (3000–3999).
//!
//! Where a name carries a routine (`PRGCREATE`, `ADDCAP`, `SETCAP`), the
//! code is only raised by that routine.

error_codes! {
    table ELAN_ENTRIES;

    ERR_ELAN_OUT_OF_RESOURCES = 3000 => "Out of slurm",
    ERR_ELAN_BAD_LIBSTATE_MAGIC = 3001 => "Bad magic in QSW libstate",
    ERR_ELAN_BAD_JOBINFO_MAGIC = 3002 => "Bad magic in QSW jobinfo",
    ERR_ELAN_PRGCREATE_INVALID = 3003 => "Program identifier in use or number of CPUs invalid",
    ERR_ELAN_PRGDESTROY_CHILDREN = 3004 => "Processes belonging to this program are still running",
    ERR_ELAN_PRGDESTROY_MISSING = 3005 => "Program identifier does not exist",
    ERR_ELAN_INIT = 3006 => "Too many processes using Elan or mapping failure",
    ERR_ELAN_CONTROL = 3007 => "Could not open elan3 control device",
    ERR_ELAN_CREATE = 3008 => "Could not create elan capability",
    ERR_ELAN_ADDCAP_NO_PROGRAM = 3009 => "Program does not exist (addcap)",
    ERR_ELAN_ADDCAP_FAULT = 3010 => "Capability has invalid address (addcap)",
    ERR_ELAN_SETCAP_INVALID = 3011 => "Invalid context number (setcap)",
    ERR_ELAN_SETCAP_FAULT = 3012 => "Capability has invalid address (setcap)",
    ERR_ELAN_GET_NODE_ID = 3013 => "Cannot determine local elan address",
    ERR_ELAN_NODE_ID_BY_HOST = 3014 => "Cannot translate hostname to elan address",
    ERR_ELAN_HOST_BY_NODE_ID = 3015 => "Cannot translate elan address to hostname",
    ERR_ELAN_SIGNAL_NO_PROGRAM = 3016 => "No such program identifier",
    ERR_ELAN_BAD_SIGNAL = 3017 => "Invalid signal number",
}
