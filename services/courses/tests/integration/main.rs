mod helpers;

mod lesson_test;
