mod view_rendering;
