mod scenario;
mod sprint_record;
