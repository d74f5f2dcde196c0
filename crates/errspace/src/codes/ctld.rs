//! Controller (scheduler) codes (2000–2999).

error_codes! {
    table CTLD_ENTRIES;

    ERR_CTLD_INVALID_PARTITION_NAME = 2000 => "Invalid partition name specified",
    ERR_CTLD_DEFAULT_PARTITION_NOT_SET = 2001 => "System default partition not set",
    ERR_CTLD_ACCESS_DENIED = 2002 => "Access denied",
    ERR_CTLD_MISSING_PARTITION_GROUP = 2003 => "User's group not permitted to use this partition",
    ERR_CTLD_NODES_NOT_IN_PARTITION = 2004 => "Requested nodes not in this partition",
    ERR_CTLD_TOO_MANY_CPUS = 2005 => "More processors requested than permitted",
    ERR_CTLD_TOO_MANY_NODES = 2006 => "More nodes requested than permitted",
    ERR_CTLD_RECORD_COPY = 2007 => "Unable to create job record, try again",
    ERR_CTLD_MISSING_SIZE_SPEC = 2008 => "Job size specification needs to be provided",
    ERR_CTLD_SCRIPT_MISSING = 2009 => "Job script not specified",
    ERR_CTLD_USER_ID_MISSING = 2010 => "User id is missing or invalid",
    ERR_CTLD_JOB_NAME_TOO_LONG = 2011 => "Job name too long",
    ERR_CTLD_DUPLICATE_JOB_ID = 2012 => "Duplicate job id",
    ERR_CTLD_PATHNAME_TOO_LONG = 2013 => "Pathname of a file or directory too long",
    ERR_CTLD_NOT_TOP_PRIORITY = 2014 => "Immediate execution impossible, higher priority jobs pending",
    ERR_CTLD_NODE_CONFIG_UNAVAILABLE = 2015 => "Requested node configuration is not available",
    ERR_CTLD_PART_CONFIG_UNAVAILABLE = 2016 => "Requested partition configuration not available now, job queued",
    ERR_CTLD_NODES_BUSY = 2017 => "Requested nodes are busy",
    ERR_CTLD_INVALID_JOB_ID = 2018 => "Invalid job id specified",
    ERR_CTLD_INVALID_NODE_NAME = 2019 => "Invalid node name specified",
    ERR_CTLD_WRITING_TO_FILE = 2020 => "I/O error writing script/environment to file",
    ERR_CTLD_TRANSITION_STATE = 2021 => "Job can not be altered now, try again later",
    ERR_CTLD_ALREADY_DONE = 2022 => "Job/step already completed",
    ERR_CTLD_INTERCONNECT_FAILURE = 2023 => "Error configuring interconnect",
    ERR_CTLD_BAD_DIST = 2024 => "Task distribution specification invalid",
    ERR_CTLD_JOB_PENDING = 2025 => "Job is pending execution",
    ERR_CTLD_BAD_TASK_COUNT = 2026 => "Task count specification invalid",
}
