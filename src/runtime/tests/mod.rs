mod stylesheet;
