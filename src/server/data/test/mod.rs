mod comment;
mod concentration;
mod diary;
mod follow;
mod like;
mod routine;
mod schedule;
mod social;
mod user;
